use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: Duration = Duration::from_millis(600); // Navigation lock after each change
pub const TRANSITION_DIM: f32 = 0.55;         // Image brightness at the start of a transition (0..1)
pub const OVERLAY_ALPHA: u8 = 70;             // Tint drawn over the image while transitioning

pub const DEFAULT_WINDOW_TITLE: &str = "Facility Showcase";
