//! This module contains functions related to processing input events.
//!
//! Unlike a window procedure, the framework does not push events at us: it
//! exposes the current input state, so [`prepare_frame`] polls it once per
//! frame and forwards it to dear imgui's input queue.

use imgui::{Io, Key, MouseButton as ImguiMouseButton};
use tracing::trace;

use crate::platform::{KeyboardKey, MouseButton, Platform};
use crate::renderer::keys::KEYS;

// Used when the framework reports a non-positive frame time, which it does
// before the first frame completes. imgui asserts on it.
const FALLBACK_DELTA_TIME: f32 = 1.0 / 60.0;

const MOUSE_BUTTONS: [(MouseButton, ImguiMouseButton); 5] = [
    (MouseButton::Left, ImguiMouseButton::Left),
    (MouseButton::Right, ImguiMouseButton::Right),
    (MouseButton::Middle, ImguiMouseButton::Middle),
    (MouseButton::Side, ImguiMouseButton::Extra1),
    (MouseButton::Extra, ImguiMouseButton::Extra2),
];

const MODIFIERS: [(Key, KeyboardKey, KeyboardKey); 4] = [
    (Key::ModCtrl, KeyboardKey::LeftControl, KeyboardKey::RightControl),
    (Key::ModShift, KeyboardKey::LeftShift, KeyboardKey::RightShift),
    (Key::ModAlt, KeyboardKey::LeftAlt, KeyboardKey::RightAlt),
    (Key::ModSuper, KeyboardKey::LeftSuper, KeyboardKey::RightSuper),
];

/// Copy display geometry, timing and input state from the framework into
/// `io`. Call it right before starting a new imgui frame.
pub fn prepare_frame<P: Platform + ?Sized>(io: &mut Io, platform: &mut P) {
    let size = display_size(platform);
    io.display_size = size;
    io.display_framebuffer_scale = framebuffer_scale(size, platform.render_size());
    io.delta_time = delta_time(platform.frame_time());

    for (key, left, right) in MODIFIERS {
        io.add_key_event(key, platform.is_key_down(left) || platform.is_key_down(right));
    }

    update_mouse(io, platform);

    for &(code, key) in KEYS {
        io.add_key_event(key, platform.is_key_down(code));
    }

    while let Some(c) = platform.char_pressed() {
        io.add_input_character(c);
    }
}

fn update_mouse<P: Platform + ?Sized>(io: &mut Io, platform: &mut P) {
    if io.want_set_mouse_pos {
        let [x, y] = io.mouse_pos;
        trace!("Moving the cursor to ({x}, {y})");
        platform.set_mouse_position([x as i32, y as i32]);
    } else {
        io.add_mouse_pos_event(platform.mouse_position());
    }

    for (button, imgui_button) in MOUSE_BUTTONS {
        io.add_mouse_button_event(imgui_button, platform.is_mouse_button_down(button));
    }

    let wheel = platform.mouse_wheel_move();
    if wheel != [0.0, 0.0] {
        io.add_mouse_wheel_event(wheel);
    }
}

/// The monitor's size in fullscreen, the window's otherwise.
pub(crate) fn display_size<P: Platform + ?Sized>(platform: &P) -> [f32; 2] {
    let [w, h] = if platform.is_window_fullscreen() {
        platform.monitor_size()
    } else {
        platform.screen_size()
    };
    [w as f32, h as f32]
}

/// Ratio between framebuffer pixels and logical display units.
pub(crate) fn framebuffer_scale(display_size: [f32; 2], render_size: Option<[i32; 2]>) -> [f32; 2] {
    match render_size {
        Some([w, h]) if w > 0 && h > 0 && display_size[0] > 0.0 && display_size[1] > 0.0 => {
            [w as f32 / display_size[0], h as f32 / display_size[1]]
        },
        _ => [1.0, 1.0],
    }
}

pub(crate) fn delta_time(frame_time: f32) -> f32 {
    if frame_time > 0.0 {
        frame_time
    } else {
        FALLBACK_DELTA_TIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_scale_follows_render_size() {
        assert_eq!(framebuffer_scale([800.0, 600.0], Some([1600, 1200])), [2.0, 2.0]);
        assert_eq!(framebuffer_scale([800.0, 600.0], Some([800, 600])), [1.0, 1.0]);
    }

    #[test]
    fn framebuffer_scale_defaults_to_one() {
        assert_eq!(framebuffer_scale([800.0, 600.0], None), [1.0, 1.0]);
        assert_eq!(framebuffer_scale([800.0, 600.0], Some([0, 0])), [1.0, 1.0]);
        assert_eq!(framebuffer_scale([0.0, 0.0], Some([800, 600])), [1.0, 1.0]);
    }

    #[test]
    fn delta_time_is_never_zero() {
        assert_eq!(delta_time(0.016), 0.016);
        assert_eq!(delta_time(0.0), FALLBACK_DELTA_TIME);
        assert_eq!(delta_time(-1.0), FALLBACK_DELTA_TIME);
    }
}
