mod harness;

use harness::context_lock;
use harness::mock::{setup, PlatformEvent};
use imgui::MouseCursor as ImguiMouseCursor;
use rlimgui::platform::MouseCursor;
use rlimgui::Config;

#[test]
fn cursor_is_applied_once_until_it_changes() {
    let _lock = context_lock();
    let (mut rlimgui, _log) = setup(Config::default());

    rlimgui.frame(|_| {}).expect("frame");
    assert_eq!(rlimgui.platform().cursor_events(), vec![
        PlatformEvent::ShowCursor,
        PlatformEvent::SetMouseCursor(MouseCursor::Arrow),
    ]);

    rlimgui.platform_mut().events.clear();
    rlimgui.frame(|_| {}).expect("frame");
    assert!(rlimgui.platform().cursor_events().is_empty());

    rlimgui.frame(|ui| ui.set_mouse_cursor(Some(ImguiMouseCursor::Hand))).expect("frame");
    assert_eq!(rlimgui.platform().cursor_events(), vec![
        PlatformEvent::ShowCursor,
        PlatformEvent::SetMouseCursor(MouseCursor::PointingHand),
    ]);
}

#[test]
fn hidden_cursor_is_hidden_on_the_os() {
    let _lock = context_lock();
    let (mut rlimgui, _log) = setup(Config::default());

    rlimgui.frame(|ui| ui.set_mouse_cursor(None)).expect("frame");
    assert_eq!(rlimgui.platform().cursor_events(), vec![PlatformEvent::HideCursor]);

    rlimgui.platform_mut().events.clear();
    rlimgui.frame(|ui| ui.set_mouse_cursor(Some(ImguiMouseCursor::TextInput))).expect("frame");
    assert_eq!(rlimgui.platform().cursor_events(), vec![
        PlatformEvent::ShowCursor,
        PlatformEvent::SetMouseCursor(MouseCursor::IBeam),
    ]);
}

#[test]
fn software_cursor_hides_os_cursor_every_frame() {
    let _lock = context_lock();
    let (mut rlimgui, _log) = setup(Config::default());
    rlimgui.context_mut().io_mut().mouse_draw_cursor = true;

    rlimgui.frame(|_| {}).expect("frame");
    rlimgui.frame(|_| {}).expect("frame");

    assert_eq!(rlimgui.platform().cursor_events(), vec![
        PlatformEvent::HideCursor,
        PlatformEvent::HideCursor,
    ]);
}

#[test]
fn cursor_changes_can_be_disabled() {
    let _lock = context_lock();
    let (mut rlimgui, _log) = setup(Config::default().with_mouse_cursor_change(false));

    rlimgui.frame(|ui| ui.set_mouse_cursor(Some(ImguiMouseCursor::ResizeAll))).expect("frame");
    rlimgui.frame(|ui| ui.set_mouse_cursor(None)).expect("frame");

    assert!(rlimgui.platform().cursor_events().is_empty());
}
