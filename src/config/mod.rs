//! Setup options for [`RlImGui`](crate::RlImGui).

use std::path::PathBuf;

use crate::fonts::IconFont;

/// Built-in color scheme applied at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// `ImGui::StyleColorsDark`.
    #[default]
    Dark,
    /// `ImGui::StyleColorsLight`.
    Light,
}

/// Options consumed once, when the backend is built.
///
/// The defaults are a dark theme, the embedded default font, no icon font, no
/// `.ini` persistence, and OS cursor changes enabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) theme: Theme,
    pub(crate) default_font: bool,
    pub(crate) icon_font: Option<IconFont>,
    pub(crate) ini_filename: Option<PathBuf>,
    pub(crate) mouse_cursor_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            default_font: true,
            icon_font: None,
            ini_filename: None,
            mouse_cursor_change: true,
        }
    }
}

impl Config {
    /// Pick the color scheme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Merge an icon font into the default font.
    pub fn with_icon_font(mut self, icon_font: IconFont) -> Self {
        self.icon_font = Some(icon_font);
        self
    }

    /// Skip the embedded default font, e.g. when fonts are added through
    /// [`RlImGuiBuilder::context_mut`](crate::RlImGuiBuilder::context_mut).
    pub fn without_default_font(mut self) -> Self {
        self.default_font = false;
        self
    }

    /// Persist window positions and sizes to this file.
    pub fn with_ini_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.ini_filename = Some(path.into());
        self
    }

    /// Allow or forbid the backend to change the OS cursor's shape and
    /// visibility.
    pub fn with_mouse_cursor_change(mut self, enabled: bool) -> Self {
        self.mouse_cursor_change = enabled;
        self
    }

    /// The configured color scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }
}
