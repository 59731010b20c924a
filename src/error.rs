use imgui::TextureId;

/// Errors reported by the backend.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The framework refused to create a texture.
    #[error("could not upload a {width}x{height} texture")]
    TextureUpload { width: u32, height: u32 },

    /// The pixel buffer does not hold `width * height` RGBA pixels.
    #[error("texture data holds {actual} bytes, expected {expected}")]
    InvalidTextureData { expected: usize, actual: usize },

    /// The texture was not created through this renderer.
    #[error("texture {0:?} is not managed by this renderer")]
    UnknownTexture(TextureId),

    /// Replacing a texture's content requires the same dimensions.
    #[error("texture {id:?} is {expected:?}, replacement is {actual:?}")]
    TextureSizeMismatch { id: TextureId, expected: [u32; 2], actual: [u32; 2] },

    /// Icon font glyph ranges must be `[first, last]` pairs followed by `0`.
    #[error("malformed glyph ranges {0:?}")]
    InvalidGlyphRanges(Vec<u32>),

    /// The display (or framebuffer) has no drawable area.
    #[error("insufficient display size: {width}x{height}")]
    InvalidDisplaySize { width: f32, height: f32 },
}

/// Result type of fallible backend operations.
pub type Result<T> = std::result::Result<T, Error>;
