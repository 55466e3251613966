use raylib::prelude::*;
use tracing::debug;

use crate::layout::{to_render_space, Control, Layout};
use crate::showcase::Showcase;

pub fn key_control(key: KeyboardKey) -> Option<Control> {
    use KeyboardKey::*;
    let control = match key {
        KEY_LEFT => Control::Previous,
        KEY_RIGHT | KEY_SPACE => Control::Next,
        KEY_ONE => Control::Indicator(0),
        KEY_TWO => Control::Indicator(1),
        KEY_THREE => Control::Indicator(2),
        KEY_FOUR => Control::Indicator(3),
        KEY_FIVE => Control::Indicator(4),
        KEY_SIX => Control::Indicator(5),
        KEY_SEVEN => Control::Indicator(6),
        KEY_EIGHT => Control::Indicator(7),
        KEY_NINE => Control::Indicator(8),
        _ => return None,
    };
    Some(control)
}

/// Reads this frame's keyboard and mouse input. Keys win over clicks.
pub fn poll(rl: &mut RaylibHandle, layout: &Layout) -> Option<Control> {
    if let Some(control) = rl.get_key_pressed().and_then(key_control) {
        return Some(control);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let point = to_render_space(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        return layout.hit_test(point);
    }
    None
}

/// Forwards a control to the showcase. Returns whether it was accepted.
pub fn apply(control: Control, showcase: &mut Showcase) -> bool {
    let accepted = match control {
        Control::Previous => showcase.retreat(),
        Control::Next => showcase.advance(),
        Control::Indicator(index) => showcase.jump_to(index),
    };
    debug!(?control, accepted, index = showcase.current_index(), "control");
    accepted
}
