//! The [`rlimgui`](crate) rendering engine.
pub mod backend;
mod cursor;
mod engine;
pub mod input;
mod keys;
pub(crate) mod pipeline;

use imgui::{Context, DrawData};

pub(crate) use self::cursor::CursorState;
pub use self::engine::RlglRenderEngine;
use crate::{RenderContext, Result};

/// The framework's low-level immediate-mode drawing API.
///
/// Vertices are submitted one at a time between [`Rlgl::begin_triangles`]
/// and [`Rlgl::end`] and accumulate in an internal render batch, which the
/// framework flushes on [`Rlgl::draw_render_batch_active`] or when it runs
/// out of room.
pub trait Rlgl {
    /// Draw and reset everything accumulated in the active render batch.
    fn draw_render_batch_active(&mut self);

    /// Enable back-face culling.
    fn enable_backface_culling(&mut self);

    /// Disable back-face culling.
    fn disable_backface_culling(&mut self);

    /// Enable the scissor test.
    fn enable_scissor_test(&mut self);

    /// Disable the scissor test.
    fn disable_scissor_test(&mut self);

    /// Set the scissor box, in framebuffer pixels with a bottom-left origin.
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Start a triangle list.
    fn begin_triangles(&mut self);

    /// Close the current primitive.
    fn end(&mut self);

    /// Bind a texture for the following vertices. `0` unbinds.
    fn set_texture(&mut self, id: u32);

    /// Make room for `vertices` more vertices. Returns `true` when the batch
    /// had to be flushed, which also closes the current primitive.
    fn check_render_batch_limit(&mut self, vertices: i32) -> bool;

    /// Set the color of the next vertex.
    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8);

    /// Set the texture coordinates of the next vertex.
    fn tex_coord2f(&mut self, u: f32, v: f32);

    /// Emit a vertex.
    fn vertex2f(&mut self, x: f32, y: f32);

    /// Upload tightly packed RGBA8 pixels. Returns the texture id, or `None`
    /// if the framework could not create the texture.
    fn load_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Option<u32>;

    /// Overwrite the whole content of a texture with RGBA8 pixels of the same
    /// dimensions.
    fn update_texture(&mut self, id: u32, rgba: &[u8], width: u32, height: u32);

    /// Release a texture.
    fn unload_texture(&mut self, id: u32);
}

/// A renderer for dear imgui draw data.
pub trait RenderEngine: RenderContext {
    /// Replay the draw lists of a finished frame.
    fn render(&mut self, draw_data: &DrawData) -> Result<()>;

    /// Build the context's font atlas and upload it as a texture.
    fn setup_fonts(&mut self, ctx: &mut Context) -> Result<()>;
}
