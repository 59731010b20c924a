use imgui::{ConfigFlags, Io, MouseCursor as ImguiMouseCursor};
use tracing::trace;

use crate::platform::{MouseCursor, Platform};

/// Tracks the cursor last applied to the OS, so the framework is only told
/// about changes.
#[derive(Debug, Default)]
pub(crate) struct CursorState {
    // `None` until the first update, `Some(None)` when imgui hides the cursor.
    current: Option<Option<ImguiMouseCursor>>,
}

impl CursorState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Apply the cursor imgui requested for the frame that was just built.
    pub(crate) fn update<P: Platform + ?Sized>(
        &mut self,
        cursor: Option<ImguiMouseCursor>,
        io: &Io,
        platform: &mut P,
    ) {
        if io.config_flags.contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE) {
            return;
        }

        if self.current == Some(cursor) && !io.mouse_draw_cursor {
            return;
        }

        trace!("Cursor change: {:?} -> {cursor:?}", self.current);
        self.current = Some(cursor);

        match cursor {
            Some(cursor) if !io.mouse_draw_cursor => {
                platform.show_cursor();
                platform.set_mouse_cursor(map_cursor(cursor));
            },
            _ => platform.hide_cursor(),
        }
    }
}

pub(crate) fn map_cursor(cursor: ImguiMouseCursor) -> MouseCursor {
    match cursor {
        ImguiMouseCursor::Arrow => MouseCursor::Arrow,
        ImguiMouseCursor::TextInput => MouseCursor::IBeam,
        ImguiMouseCursor::Hand => MouseCursor::PointingHand,
        ImguiMouseCursor::ResizeAll => MouseCursor::ResizeAll,
        ImguiMouseCursor::ResizeEW => MouseCursor::ResizeEw,
        ImguiMouseCursor::ResizeNESW => MouseCursor::ResizeNesw,
        ImguiMouseCursor::ResizeNS => MouseCursor::ResizeNs,
        ImguiMouseCursor::ResizeNWSE => MouseCursor::ResizeNwse,
        ImguiMouseCursor::NotAllowed => MouseCursor::NotAllowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_imgui_cursor() {
        assert_eq!(map_cursor(ImguiMouseCursor::Arrow), MouseCursor::Arrow);
        assert_eq!(map_cursor(ImguiMouseCursor::TextInput), MouseCursor::IBeam);
        assert_eq!(map_cursor(ImguiMouseCursor::Hand), MouseCursor::PointingHand);
        assert_eq!(map_cursor(ImguiMouseCursor::ResizeAll), MouseCursor::ResizeAll);
        assert_eq!(map_cursor(ImguiMouseCursor::ResizeEW), MouseCursor::ResizeEw);
        assert_eq!(map_cursor(ImguiMouseCursor::ResizeNESW), MouseCursor::ResizeNesw);
        assert_eq!(map_cursor(ImguiMouseCursor::ResizeNS), MouseCursor::ResizeNs);
        assert_eq!(map_cursor(ImguiMouseCursor::ResizeNWSE), MouseCursor::ResizeNwse);
        assert_eq!(map_cursor(ImguiMouseCursor::NotAllowed), MouseCursor::NotAllowed);
    }
}
