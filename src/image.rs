//! Widgets that draw framework textures.
//!
//! Framework texture ids are passed to dear imgui unchanged, so any texture
//! the framework created can be drawn without registering it first.

use imgui::{Image, TextureId, Ui};

/// A texture living on the GPU, as described by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    /// Framework (OpenGL) texture id.
    pub id: u32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Texture {
    /// The id dear imgui uses to refer to this texture.
    pub fn texture_id(&self) -> TextureId {
        TextureId::new(self.id as usize)
    }

    fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// An offscreen render target. Its color texture is stored upside down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTexture {
    /// Color attachment.
    pub texture: Texture,
}

/// A rectangle in texture pixels. Negative extents flip the image.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[cfg(feature = "raylib")]
impl From<raylib::ffi::Texture2D> for Texture {
    fn from(texture: raylib::ffi::Texture2D) -> Self {
        Self { id: texture.id, width: texture.width, height: texture.height }
    }
}

#[cfg(feature = "raylib")]
impl From<raylib::ffi::RenderTexture2D> for RenderTexture {
    fn from(render_texture: raylib::ffi::RenderTexture2D) -> Self {
        Self { texture: render_texture.texture.into() }
    }
}

#[cfg(feature = "raylib")]
impl From<raylib::ffi::Rectangle> for Rectangle {
    fn from(rect: raylib::ffi::Rectangle) -> Self {
        Self { x: rect.x, y: rect.y, width: rect.width, height: rect.height }
    }
}

/// Draw a texture at its native size.
pub fn image(ui: &Ui, texture: &Texture) {
    Image::new(texture.texture_id(), texture.size()).build(ui);
}

/// Draw a texture as a button at its native size. Returns `true` when
/// clicked.
pub fn image_button(ui: &Ui, label: impl AsRef<str>, texture: &Texture) -> bool {
    ui.image_button(label, texture.texture_id(), texture.size())
}

/// Draw a texture stretched to `width` × `height`.
pub fn image_size(ui: &Ui, texture: &Texture, width: i32, height: i32) {
    Image::new(texture.texture_id(), [width as f32, height as f32]).build(ui);
}

/// Draw the `source` portion of a texture stretched to `dest_width` ×
/// `dest_height`.
pub fn image_rect(ui: &Ui, texture: &Texture, dest_width: i32, dest_height: i32, source: Rectangle) {
    let (uv0, uv1) = source_uvs(texture, source);
    Image::new(texture.texture_id(), [dest_width as f32, dest_height as f32])
        .uv0(uv0)
        .uv1(uv1)
        .build(ui);
}

/// Draw a render texture at its native size, the right way up.
pub fn image_render_texture(ui: &Ui, render_texture: &RenderTexture) {
    let texture = &render_texture.texture;
    image_rect(ui, texture, texture.width, texture.height, flipped_source(texture));
}

/// Draw a render texture scaled to fit the available content region,
/// preserving its aspect ratio, optionally centered in the region.
pub fn image_render_texture_fit(ui: &Ui, render_texture: &RenderTexture, center: bool) {
    let texture = &render_texture.texture;
    let area = ui.content_region_avail();
    let [width, height] = fit_size(area, texture.width, texture.height);

    if center {
        let [_, y] = ui.cursor_pos();
        ui.set_cursor_pos([
            area[0] / 2. - (width / 2) as f32,
            y + (area[1] / 2. - (height / 2) as f32),
        ]);
    }

    image_rect(ui, texture, width, height, flipped_source(texture));
}

fn flipped_source(texture: &Texture) -> Rectangle {
    Rectangle { x: 0., y: 0., width: texture.width as f32, height: -(texture.height as f32) }
}

/// Texture coordinates of `source`. A negative width or height mirrors that
/// axis.
pub(crate) fn source_uvs(texture: &Texture, source: Rectangle) -> ([f32; 2], [f32; 2]) {
    let axis = |offset: f32, extent: f32, size: i32| {
        let size = size as f32;
        if extent < 0. {
            let start = -(offset / size);
            (start, start - extent.abs() / size)
        } else {
            let start = offset / size;
            (start, start + extent / size)
        }
    };

    let (u0, u1) = axis(source.x, source.width, texture.width);
    let (v0, v1) = axis(source.y, source.height, texture.height);
    ([u0, v0], [u1, v1])
}

/// Largest size with the texture's aspect ratio that fits in `area`.
pub(crate) fn fit_size(area: [f32; 2], width: i32, height: i32) -> [i32; 2] {
    if width <= 0 || height <= 0 {
        return [0, 0];
    }

    let mut scale = area[0] / width as f32;
    if height as f32 * scale > area[1] {
        scale = area[1] / height as f32;
    }

    [(width as f32 * scale) as i32, (height as f32 * scale) as i32]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTURE: Texture = Texture { id: 3, width: 200, height: 100 };

    #[test]
    fn texture_id_is_passed_through() {
        assert_eq!(TEXTURE.texture_id().id(), 3);
    }

    #[test]
    fn full_source_covers_unit_square() {
        let source = Rectangle { x: 0., y: 0., width: 200., height: 100. };
        assert_eq!(source_uvs(&TEXTURE, source), ([0., 0.], [1., 1.]));
    }

    #[test]
    fn sub_rectangle_uvs() {
        let source = Rectangle { x: 50., y: 25., width: 100., height: 50. };
        assert_eq!(source_uvs(&TEXTURE, source), ([0.25, 0.25], [0.75, 0.75]));
    }

    #[test]
    fn negative_height_flips_vertically() {
        assert_eq!(source_uvs(&TEXTURE, flipped_source(&TEXTURE)), ([0., 0.], [1., -1.]));
    }

    #[test]
    fn negative_width_flips_horizontally() {
        let source = Rectangle { x: 50., y: 0., width: -100., height: 100. };
        assert_eq!(source_uvs(&TEXTURE, source), ([-0.25, 0.], [-0.75, 1.]));
    }

    #[test]
    fn fit_is_limited_by_width() {
        assert_eq!(fit_size([100., 400.], 200, 100), [100, 50]);
    }

    #[test]
    fn fit_is_limited_by_height() {
        assert_eq!(fit_size([400., 100.], 200, 100), [200, 100]);
        assert_eq!(fit_size([400., 50.], 200, 100), [100, 50]);
    }

    #[test]
    fn fit_of_empty_texture_is_empty() {
        assert_eq!(fit_size([400., 400.], 0, 100), [0, 0]);
    }
}
