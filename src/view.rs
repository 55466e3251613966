use std::path::Path;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::*;
use crate::layout::Layout;
use crate::showcase::Showcase;
use crate::texture_loader::load_texture_with_exif_rotation;

const BACKGROUND: Color = Color::new(18, 24, 38, 255);
const TITLE_SIZE: i32 = 56;
const DESCRIPTION_SIZE: i32 = 30;
const ARROW_GLYPH_SIZE: i32 = 80;

/// Paints the showcase into the framebuffer.
pub struct ShowcaseView {
    layout: Layout,
    textures: Vec<Option<Texture2D>>, // One slot per item, None when loading failed
}

impl ShowcaseView {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, showcase: &Showcase) -> Self {
        let textures: Vec<Option<Texture2D>> = showcase
            .items()
            .iter()
            .map(|item| match load_texture_with_exif_rotation(rl, thread, Path::new(item.image())) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(title = item.title(), error = %e, "image unavailable, drawing placeholder");
                    None
                }
            })
            .collect();

        let loaded = textures.iter().filter(|t| t.is_some()).count();
        info!(loaded, total = textures.len(), "showcase textures ready");

        Self {
            layout: Layout::new(showcase.len()),
            textures,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, showcase: &Showcase) {
        d.clear_background(BACKGROUND);

        let locked = showcase.state().is_transitioning();
        self.draw_image(d, showcase, locked);
        self.draw_caption(d, showcase);
        self.draw_arrows(d, locked);
        self.draw_indicators(d, showcase, locked);
    }

    fn draw_image(&self, d: &mut impl RaylibDraw, showcase: &Showcase, locked: bool) {
        let area = self.layout.image_area;

        match &self.textures[showcase.current_index()] {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Fade back in from dimmed over the transition window
                let brightness = if locked {
                    ease::cubic_out(showcase.transition_progress(), TRANSITION_DIM, 1.0 - TRANSITION_DIM, 1.0)
                } else {
                    1.0
                };
                let level = (255.0 * brightness.clamp(0.0, 1.0)) as u8;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    self.layout.fit_image(tex_width, tex_height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::new(level, level, level, 255),
                );
            }
            None => {
                d.draw_rectangle_rec(area, Color::DARKGRAY);
                d.draw_text(
                    showcase.current_item().image(),
                    area.x as i32 + 20,
                    area.y as i32 + 20,
                    24,
                    Color::LIGHTGRAY,
                );
            }
        }

        if locked {
            d.draw_rectangle_rec(area, Color::new(0, 0, 0, OVERLAY_ALPHA));
        }
    }

    fn draw_caption(&self, d: &mut impl RaylibDraw, showcase: &Showcase) {
        let item = showcase.current_item();
        let title = self.layout.title_position;
        let description = self.layout.description_position;

        d.draw_text(item.title(), title.x as i32, title.y as i32, TITLE_SIZE, Color::WHITE);
        if !item.description().is_empty() {
            d.draw_text(
                item.description(),
                description.x as i32,
                description.y as i32,
                DESCRIPTION_SIZE,
                Color::LIGHTGRAY,
            );
        }
    }

    fn draw_arrows(&self, d: &mut impl RaylibDraw, locked: bool) {
        let (fill, glyph) = if locked {
            (Color::GRAY.fade(0.25), Color::LIGHTGRAY.fade(0.4))
        } else {
            (Color::WHITE.fade(0.8), BACKGROUND)
        };

        for (rect, label) in [(self.layout.previous, "<"), (self.layout.next, ">")] {
            d.draw_rectangle_rec(rect, fill);
            d.draw_text(
                label,
                (rect.x + rect.width * 0.5) as i32 - ARROW_GLYPH_SIZE / 4,
                (rect.y + rect.height * 0.5) as i32 - ARROW_GLYPH_SIZE / 2,
                ARROW_GLYPH_SIZE,
                glyph,
            );
        }
    }

    fn draw_indicators(&self, d: &mut impl RaylibDraw, showcase: &Showcase, locked: bool) {
        let alpha = if locked { 0.4 } else { 1.0 };

        for (i, dot) in self.layout.indicators.iter().enumerate() {
            let color = if i == showcase.current_index() { Color::GOLD } else { Color::GRAY };
            d.draw_circle(
                (dot.x + dot.width * 0.5) as i32,
                (dot.y + dot.height * 0.5) as i32,
                dot.width * 0.5,
                color.fade(alpha),
            );
        }
    }
}
