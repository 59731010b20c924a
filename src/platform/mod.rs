//! Window and input accessors of the host framework.
//!
//! The backend never talks to raylib directly: everything it needs to know
//! about the window, the keyboard, the mouse and the OS cursor goes through
//! the [`Platform`] trait. The `raylib` feature provides
//! [`RaylibPlatform`](raylib::RaylibPlatform), which forwards each call to the
//! matching `raylib::ffi` function.

#[cfg(feature = "raylib")]
pub mod raylib;

/// Keyboard scan codes, as numbered by the framework.
#[allow(missing_docs)]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardKey {
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Zero = 48,
    One = 49,
    Two = 50,
    Three = 51,
    Four = 52,
    Five = 53,
    Six = 54,
    Seven = 55,
    Eight = 56,
    Nine = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    Grave = 96,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    KbMenu = 348,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
}

/// Mouse buttons, as numbered by the framework.
#[allow(missing_docs)]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Side = 3,
    Extra = 4,
}

/// OS cursor shapes, as numbered by the framework.
#[allow(missing_docs)]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseCursor {
    Default = 0,
    Arrow = 1,
    IBeam = 2,
    Crosshair = 3,
    PointingHand = 4,
    ResizeEw = 5,
    ResizeNs = 6,
    ResizeNwse = 7,
    ResizeNesw = 8,
    ResizeAll = 9,
    NotAllowed = 10,
}

/// Everything the backend reads from, or pushes to, the host window.
///
/// Queries take `&self`; calls that change framework state or consume one of
/// its queues take `&mut self`.
pub trait Platform {
    /// Logical size of the window's client area.
    fn screen_size(&self) -> [i32; 2];

    /// Whether the window currently covers a whole monitor.
    fn is_window_fullscreen(&self) -> bool;

    /// Size of the monitor the window is on.
    fn monitor_size(&self) -> [i32; 2];

    /// Size of the framebuffer in pixels, if the framework can tell.
    fn render_size(&self) -> Option<[i32; 2]> {
        None
    }

    /// Content scale of the window's monitor.
    fn window_scale_dpi(&self) -> [f32; 2] {
        [1.0, 1.0]
    }

    /// Whether the window was created with a high-DPI framebuffer.
    fn is_window_high_dpi(&self) -> bool {
        false
    }

    /// Seconds elapsed while drawing the last frame.
    fn frame_time(&self) -> f32;

    /// Whether `key` is being held.
    fn is_key_down(&self, key: KeyboardKey) -> bool;

    /// Pop the next character typed since the last frame.
    fn char_pressed(&mut self) -> Option<char>;

    /// Cursor position relative to the window.
    fn mouse_position(&self) -> [f32; 2];

    /// Warp the cursor to a position relative to the window.
    fn set_mouse_position(&mut self, position: [i32; 2]);

    /// Whether `button` is being held.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Wheel movement since the last frame, `[horizontal, vertical]`.
    fn mouse_wheel_move(&self) -> [f32; 2];

    /// Make the OS cursor visible.
    fn show_cursor(&mut self);

    /// Hide the OS cursor.
    fn hide_cursor(&mut self);

    /// Change the OS cursor's shape.
    fn set_mouse_cursor(&mut self, cursor: MouseCursor);
}
