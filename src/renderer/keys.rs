use imgui::Key;

use crate::platform::KeyboardKey;

/// Every framework key that has a dear imgui counterpart.
///
/// Applied once per frame by [`prepare_frame`](super::input::prepare_frame).
pub(crate) const KEYS: &[(KeyboardKey, Key)] = &[
    (KeyboardKey::Apostrophe, Key::Apostrophe),
    (KeyboardKey::Comma, Key::Comma),
    (KeyboardKey::Minus, Key::Minus),
    (KeyboardKey::Period, Key::Period),
    (KeyboardKey::Slash, Key::Slash),
    (KeyboardKey::Zero, Key::Alpha0),
    (KeyboardKey::One, Key::Alpha1),
    (KeyboardKey::Two, Key::Alpha2),
    (KeyboardKey::Three, Key::Alpha3),
    (KeyboardKey::Four, Key::Alpha4),
    (KeyboardKey::Five, Key::Alpha5),
    (KeyboardKey::Six, Key::Alpha6),
    (KeyboardKey::Seven, Key::Alpha7),
    (KeyboardKey::Eight, Key::Alpha8),
    (KeyboardKey::Nine, Key::Alpha9),
    (KeyboardKey::Semicolon, Key::Semicolon),
    (KeyboardKey::Equal, Key::Equal),
    (KeyboardKey::A, Key::A),
    (KeyboardKey::B, Key::B),
    (KeyboardKey::C, Key::C),
    (KeyboardKey::D, Key::D),
    (KeyboardKey::E, Key::E),
    (KeyboardKey::F, Key::F),
    (KeyboardKey::G, Key::G),
    (KeyboardKey::H, Key::H),
    (KeyboardKey::I, Key::I),
    (KeyboardKey::J, Key::J),
    (KeyboardKey::K, Key::K),
    (KeyboardKey::L, Key::L),
    (KeyboardKey::M, Key::M),
    (KeyboardKey::N, Key::N),
    (KeyboardKey::O, Key::O),
    (KeyboardKey::P, Key::P),
    (KeyboardKey::Q, Key::Q),
    (KeyboardKey::R, Key::R),
    (KeyboardKey::S, Key::S),
    (KeyboardKey::T, Key::T),
    (KeyboardKey::U, Key::U),
    (KeyboardKey::V, Key::V),
    (KeyboardKey::W, Key::W),
    (KeyboardKey::X, Key::X),
    (KeyboardKey::Y, Key::Y),
    (KeyboardKey::Z, Key::Z),
    (KeyboardKey::Space, Key::Space),
    (KeyboardKey::Escape, Key::Escape),
    (KeyboardKey::Enter, Key::Enter),
    (KeyboardKey::Tab, Key::Tab),
    (KeyboardKey::Backspace, Key::Backspace),
    (KeyboardKey::Insert, Key::Insert),
    (KeyboardKey::Delete, Key::Delete),
    (KeyboardKey::Right, Key::RightArrow),
    (KeyboardKey::Left, Key::LeftArrow),
    (KeyboardKey::Down, Key::DownArrow),
    (KeyboardKey::Up, Key::UpArrow),
    (KeyboardKey::PageUp, Key::PageUp),
    (KeyboardKey::PageDown, Key::PageDown),
    (KeyboardKey::Home, Key::Home),
    (KeyboardKey::End, Key::End),
    (KeyboardKey::CapsLock, Key::CapsLock),
    (KeyboardKey::ScrollLock, Key::ScrollLock),
    (KeyboardKey::NumLock, Key::NumLock),
    (KeyboardKey::PrintScreen, Key::PrintScreen),
    (KeyboardKey::Pause, Key::Pause),
    (KeyboardKey::F1, Key::F1),
    (KeyboardKey::F2, Key::F2),
    (KeyboardKey::F3, Key::F3),
    (KeyboardKey::F4, Key::F4),
    (KeyboardKey::F5, Key::F5),
    (KeyboardKey::F6, Key::F6),
    (KeyboardKey::F7, Key::F7),
    (KeyboardKey::F8, Key::F8),
    (KeyboardKey::F9, Key::F9),
    (KeyboardKey::F10, Key::F10),
    (KeyboardKey::F11, Key::F11),
    (KeyboardKey::F12, Key::F12),
    (KeyboardKey::LeftShift, Key::LeftShift),
    (KeyboardKey::LeftControl, Key::LeftCtrl),
    (KeyboardKey::LeftAlt, Key::LeftAlt),
    (KeyboardKey::LeftSuper, Key::LeftSuper),
    (KeyboardKey::RightShift, Key::RightShift),
    (KeyboardKey::RightControl, Key::RightCtrl),
    (KeyboardKey::RightAlt, Key::RightAlt),
    (KeyboardKey::RightSuper, Key::RightSuper),
    (KeyboardKey::KbMenu, Key::Menu),
    (KeyboardKey::LeftBracket, Key::LeftBracket),
    (KeyboardKey::Backslash, Key::Backslash),
    (KeyboardKey::RightBracket, Key::RightBracket),
    (KeyboardKey::Grave, Key::GraveAccent),
    (KeyboardKey::Kp0, Key::Keypad0),
    (KeyboardKey::Kp1, Key::Keypad1),
    (KeyboardKey::Kp2, Key::Keypad2),
    (KeyboardKey::Kp3, Key::Keypad3),
    (KeyboardKey::Kp4, Key::Keypad4),
    (KeyboardKey::Kp5, Key::Keypad5),
    (KeyboardKey::Kp6, Key::Keypad6),
    (KeyboardKey::Kp7, Key::Keypad7),
    (KeyboardKey::Kp8, Key::Keypad8),
    (KeyboardKey::Kp9, Key::Keypad9),
    (KeyboardKey::KpDecimal, Key::KeypadDecimal),
    (KeyboardKey::KpDivide, Key::KeypadDivide),
    (KeyboardKey::KpMultiply, Key::KeypadMultiply),
    (KeyboardKey::KpSubtract, Key::KeypadSubtract),
    (KeyboardKey::KpAdd, Key::KeypadAdd),
    (KeyboardKey::KpEnter, Key::KeypadEnter),
    (KeyboardKey::KpEqual, Key::KeypadEqual),
];
