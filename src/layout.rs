use raylib::prelude::*;
use crate::constants::*;

const ARROW_SIZE: f32 = 120.0;
const ARROW_MARGIN: f32 = 80.0;
const DOT_SIZE: f32 = 24.0;
const DOT_SPACING: f32 = 48.0;
const DOT_Y: f32 = 1000.0;

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
}

/// Screen regions of the showcase, in framebuffer coordinates.
pub struct Layout {
    pub image_area: Rectangle,
    pub title_position: Vector2,
    pub description_position: Vector2,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Rectangle>,
}

impl Layout {
    pub fn new(item_count: usize) -> Layout {
        let width = RENDER_WIDTH as f32;
        let height = RENDER_HEIGHT as f32;
        let arrow_y = (height - ARROW_SIZE) * 0.45;

        // Dots are centered as a row along the bottom edge
        let row_width = item_count.saturating_sub(1) as f32 * DOT_SPACING + DOT_SIZE;
        let row_x = (width - row_width) * 0.5;
        let indicators = (0..item_count)
            .map(|i| Rectangle::new(row_x + i as f32 * DOT_SPACING, DOT_Y, DOT_SIZE, DOT_SIZE))
            .collect();

        Layout {
            image_area: Rectangle::new(260.0, 60.0, width - 520.0, 720.0),
            title_position: Vector2::new(260.0, 820.0),
            description_position: Vector2::new(260.0, 900.0),
            previous: Rectangle::new(ARROW_MARGIN, arrow_y, ARROW_SIZE, ARROW_SIZE),
            next: Rectangle::new(width - ARROW_MARGIN - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE),
            indicators,
        }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if contains(&self.previous, point) {
            return Some(Control::Previous);
        }
        if contains(&self.next, point) {
            return Some(Control::Next);
        }
        self.indicators
            .iter()
            .position(|dot| contains(dot, point))
            .map(Control::Indicator)
    }

    /// Largest rectangle with the texture's aspect ratio that fits the image area.
    pub fn fit_image(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        let area = self.image_area;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return area;
        }
        let scale = (area.width / tex_width).min(area.height / tex_height);
        let width = tex_width * scale;
        let height = tex_height * scale;
        Rectangle::new(
            area.x + (area.width - width) * 0.5,
            area.y + (area.height - height) * 0.5,
            width,
            height,
        )
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.width && point.y >= rect.y && point.y < rect.y + rect.height
}

/// Window coordinates to framebuffer coordinates; the framebuffer is stretched to the window.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}
