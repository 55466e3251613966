use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod constants;
mod error;
mod input;
mod item;
mod layout;
mod showcase;
mod state;
mod texture_loader;
mod timer;
mod view;

use crate::config::{items_from_directory, ShowcaseConfig};
use crate::constants::*;
use crate::showcase::Showcase;
use crate::view::ShowcaseView;

/// Rotating facility showcase.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file listing the items to show; takes precedence over --dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show every image in this directory, titled after the file names
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Navigation lock after each change, in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,
}

fn load_config(cli: &Cli) -> anyhow::Result<ShowcaseConfig> {
    let mut config = match (&cli.config, &cli.dir) {
        (Some(path), _) => ShowcaseConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        (None, Some(dir)) => ShowcaseConfig {
            items: items_from_directory(dir)
                .with_context(|| format!("reading images from {}", dir.display()))?,
            ..ShowcaseConfig::default()
        },
        (None, None) => ShowcaseConfig::default(),
    };
    if let Some(ms) = cli.transition_ms {
        config.transition_ms = ms;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let transition = config.transition();
    let mut showcase = Showcase::new(config.items)
        .context("building showcase")?
        .with_transition(transition);
    info!(
        items = showcase.len(),
        transition_ms = config.transition_ms,
        "starting showcase"
    );

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&config.window_title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let view = ShowcaseView::new(&mut rl, &thread, &showcase);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {e}"))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        // 1. Release the navigation lock once the window has elapsed
        showcase.update(dt);

        // 2. Navigation requests; rejected while the lock is held
        if let Some(control) = input::poll(&mut rl, view.layout()) {
            input::apply(control, &mut showcase);
        }

        // 3. Render into the fixed size framebuffer, then stretch it to the window
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut target| {
            view.draw(&mut target, &showcase);
        });

        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    showcase.unmount();
    info!("showcase closed");
    Ok(())
}
