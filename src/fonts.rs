//! Font atlas setup.
//!
//! The backend always starts from dear imgui's embedded font. An icon font
//! (e.g. Font Awesome's `fa-solid-900.ttf`) can be merged into it, so icon
//! code points render inline with regular text.

use std::fmt;

use imgui::{Context, FontConfig, FontGlyphRanges, FontSource};
use tracing::debug;

use crate::config::Config;
use crate::platform::Platform;
use crate::{Error, Result};

/// First code point of the Font Awesome icon range.
pub const ICON_MIN_FA: u32 = 0xe005;
/// Last code point of the Font Awesome icon range.
pub const ICON_MAX_FA: u32 = 0xf8ff;
/// Pixel size matching the embedded default font.
pub const FONT_AWESOME_ICON_SIZE: f32 = 11.0;

/// Zero-terminated glyph ranges covering the Font Awesome icons.
pub static FONT_AWESOME_GLYPH_RANGES: [u32; 3] = [ICON_MIN_FA, ICON_MAX_FA, 0];

/// A TTF icon font merged into the default font.
#[derive(Clone, Copy)]
pub struct IconFont {
    pub(crate) data: &'static [u8],
    pub(crate) size: f32,
    pub(crate) glyph_ranges: &'static [u32],
}

impl IconFont {
    /// An icon font from TTF file contents, rendered at `size` pixels before
    /// DPI scaling.
    ///
    /// `glyph_ranges` lists inclusive `[first, last]` code point pairs and
    /// ends with a `0`.
    pub fn new(data: &'static [u8], size: f32, glyph_ranges: &'static [u32]) -> Result<Self> {
        check_glyph_ranges(glyph_ranges)?;
        Ok(Self { data, size, glyph_ranges })
    }

    /// Font Awesome at the default icon size.
    pub fn font_awesome(data: &'static [u8]) -> Self {
        Self { data, size: FONT_AWESOME_ICON_SIZE, glyph_ranges: &FONT_AWESOME_GLYPH_RANGES }
    }
}

fn check_glyph_ranges(ranges: &[u32]) -> Result<()> {
    let valid = match ranges.split_last() {
        Some((0, pairs)) if !pairs.is_empty() && pairs.len() % 2 == 0 => pairs
            .chunks_exact(2)
            .all(|pair| pair[0] != 0 && pair[0] <= pair[1]),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidGlyphRanges(ranges.to_vec()))
    }
}

impl fmt::Debug for IconFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconFont")
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .field("size", &self.size)
            .field("glyph_ranges", &self.glyph_ranges)
            .finish()
    }
}

/// Add the configured fonts to the context's atlas. The atlas still has to be
/// built and uploaded afterwards.
pub(crate) fn add_fonts<P: Platform + ?Sized>(ctx: &mut Context, config: &Config, platform: &P) {
    let sources = font_sources(config, platform);
    if !sources.is_empty() {
        ctx.fonts().add_font(&sources);
    }
}

/// The default font, then the icon font merged into it.
pub(crate) fn font_sources<'a, P: Platform + ?Sized>(
    config: &'a Config,
    platform: &P,
) -> Vec<FontSource<'a>> {
    let mut sources = Vec::with_capacity(2);

    if config.default_font {
        sources.push(FontSource::DefaultFontData { config: None });
    }

    if let Some(icon_font) = &config.icon_font {
        let (size, rasterizer_multiply) = icon_metrics(
            icon_font.size,
            platform.window_scale_dpi()[1],
            platform.is_window_high_dpi(),
        );
        debug!("Merging icon font at {size}px");

        sources.push(FontSource::TtfData {
            data: icon_font.data,
            size_pixels: size,
            config: Some(FontConfig {
                pixel_snap_h: true,
                oversample_h: 2,
                oversample_v: 1,
                rasterizer_multiply,
                glyph_ranges: FontGlyphRanges::from_slice(icon_font.glyph_ranges),
                ..FontConfig::default()
            }),
        });
    }

    sources
}

/// Icon size and rasterizer multiplier for the window's DPI scale.
///
/// Without a high-DPI framebuffer, glyphs are rasterized at the scaled size so
/// they stay sharp. macOS already reports scaled framebuffers.
pub(crate) fn icon_metrics(size: f32, dpi_scale: f32, high_dpi: bool) -> (f32, f32) {
    if cfg!(target_os = "macos") {
        return (size, 1.0);
    }

    if high_dpi {
        (size, dpi_scale)
    } else {
        (size * dpi_scale, dpi_scale)
    }
}
