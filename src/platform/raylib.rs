//! [`Platform`] and clipboard implementations over `raylib::ffi`.
//!
//! raylib keeps its window, input and clipboard state in process globals, so
//! these types carry no data: they only prove, by construction, that the
//! caller has initialized a window before the backend starts polling it.

use std::ffi::{CStr, CString};

use imgui::ClipboardBackend;
use raylib::ffi;
use tracing::error;

use super::{KeyboardKey, MouseButton, MouseCursor, Platform};

const FLAG_WINDOW_HIGHDPI: u32 = 0x0000_2000;

/// Reads input from, and drives the cursor of, the window opened by
/// `raylib::init()`.
#[derive(Debug)]
pub struct RaylibPlatform(());

impl RaylibPlatform {
    /// Bind to the current raylib window.
    ///
    /// Borrowing the handle ensures the window exists; the platform itself
    /// does not keep the borrow.
    pub fn new(_handle: &raylib::RaylibHandle) -> Self {
        Self(())
    }
}

impl Platform for RaylibPlatform {
    fn screen_size(&self) -> [i32; 2] {
        unsafe { [ffi::GetScreenWidth(), ffi::GetScreenHeight()] }
    }

    fn is_window_fullscreen(&self) -> bool {
        unsafe { ffi::IsWindowFullscreen() }
    }

    fn monitor_size(&self) -> [i32; 2] {
        unsafe {
            let monitor = ffi::GetCurrentMonitor();
            [ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor)]
        }
    }

    fn render_size(&self) -> Option<[i32; 2]> {
        Some(unsafe { [ffi::GetRenderWidth(), ffi::GetRenderHeight()] })
    }

    fn window_scale_dpi(&self) -> [f32; 2] {
        let scale = unsafe { ffi::GetWindowScaleDPI() };
        [scale.x, scale.y]
    }

    fn is_window_high_dpi(&self) -> bool {
        unsafe { ffi::IsWindowState(FLAG_WINDOW_HIGHDPI) }
    }

    fn frame_time(&self) -> f32 {
        unsafe { ffi::GetFrameTime() }
    }

    fn is_key_down(&self, key: KeyboardKey) -> bool {
        unsafe { ffi::IsKeyDown(key as i32) }
    }

    fn char_pressed(&mut self) -> Option<char> {
        loop {
            let codepoint = unsafe { ffi::GetCharPressed() };
            if codepoint <= 0 {
                return None;
            }
            if let Some(c) = char::from_u32(codepoint as u32) {
                return Some(c);
            }
        }
    }

    fn mouse_position(&self) -> [f32; 2] {
        unsafe { [ffi::GetMouseX() as f32, ffi::GetMouseY() as f32] }
    }

    fn set_mouse_position(&mut self, [x, y]: [i32; 2]) {
        unsafe { ffi::SetMousePosition(x, y) }
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        unsafe { ffi::IsMouseButtonDown(button as i32) }
    }

    fn mouse_wheel_move(&self) -> [f32; 2] {
        let wheel = unsafe { ffi::GetMouseWheelMoveV() };
        [wheel.x, wheel.y]
    }

    fn show_cursor(&mut self) {
        unsafe { ffi::ShowCursor() }
    }

    fn hide_cursor(&mut self) {
        unsafe { ffi::HideCursor() }
    }

    fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        unsafe { ffi::SetMouseCursor(cursor as i32) }
    }
}

/// System clipboard access through raylib.
#[derive(Debug, Default)]
pub struct RaylibClipboard;

impl ClipboardBackend for RaylibClipboard {
    fn get(&mut self) -> Option<String> {
        let text = unsafe { ffi::GetClipboardText() };
        if text.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned())
    }

    fn set(&mut self, value: &str) {
        match CString::new(value) {
            Ok(text) => unsafe { ffi::SetClipboardText(text.as_ptr()) },
            Err(e) => error!("Refusing to copy text with an interior nul byte: {e}"),
        }
    }
}
