//! # rlimgui
//!
//! This library draws [`dear imgui`](https://docs.rs/imgui/0.11.0/imgui/)
//! user interfaces with [raylib](https://www.raylib.com/)'s `rlgl`
//! immediate-mode API, and feeds imgui the window's keyboard, mouse,
//! clipboard and cursor state.
//!
//! Every frame, [`RlImGui::frame`]:
//!
//! 1. copies display size, framebuffer scale, frame time, keys, modifiers,
//!    mouse position, buttons, wheel and typed characters into [`imgui::Io`];
//! 2. runs your UI code;
//! 3. shows, hides or reshapes the OS cursor as imgui requests;
//! 4. replays the draw lists as scissored, textured triangles.
//!
//! The backend reaches the framework through two traits, [`Platform`] for
//! window and input state and [`Rlgl`] for drawing. With the `raylib` feature,
//! [`RaylibPlatform`](platform::raylib::RaylibPlatform) and
//! [`RaylibRlgl`](renderer::backend::raylib::RaylibRlgl) implement them on
//! top of `raylib::ffi`.
//!
//! ## Examples
//!
//! ### Drawing a window
//!
//! ```no_run
//! # #[cfg(feature = "raylib")]
//! # fn main() -> rlimgui::Result<()> {
//! use raylib::prelude::*;
//! use rlimgui::platform::raylib::{RaylibClipboard, RaylibPlatform};
//! use rlimgui::renderer::backend::raylib::RaylibRlgl;
//! use rlimgui::{Config, RlImGui};
//!
//! let (mut rl, thread) = raylib::init().size(1280, 720).title("rlimgui").build();
//!
//! let mut rlimgui =
//!     RlImGui::builder(RaylibPlatform::new(&rl), RaylibRlgl::new(&rl), Config::default())
//!         .with_clipboard(RaylibClipboard)
//!         .build()?;
//!
//! while !rl.window_should_close() {
//!     let mut d = rl.begin_drawing(&thread);
//!     d.clear_background(Color::DARKGRAY);
//!
//!     rlimgui.frame(|ui| {
//!         ui.window("Hello").build(|| ui.text("Hello, raylib!"));
//!     })?;
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "raylib"))]
//! # fn main() {}
//! ```
//!
//! ### Render loops
//!
//! State that lives across frames can implement [`ImguiRenderLoop`] and be
//! driven by [`RlImGui::run_frame`], which also hands out a
//! [`RenderContext`] for uploading textures.
#![deny(missing_docs)]

use imgui::{Context, TextureId, Ui};
pub use {imgui, tracing};

pub mod config;
mod error;
pub mod fonts;
pub mod image;
pub mod platform;
pub mod renderer;

pub use config::{Config, Theme};
pub use error::{Error, Result};
pub use platform::Platform;
pub use renderer::pipeline::{RlImGui, RlImGuiBuilder};
pub use renderer::{RenderEngine, Rlgl, RlglRenderEngine};

/// Texture management for [`ImguiRenderLoop`] callbacks.
///
/// Textures are RGBA8, tightly packed, and are released when the renderer
/// is dropped.
pub trait RenderContext {
    /// Load texture and return the [`TextureId`] to draw it with. Invoke it in
    /// your [`ImguiRenderLoop::initialize`] method for setting up textures.
    fn load_texture(&mut self, data: &[u8], width: u32, height: u32) -> Result<TextureId>;

    /// Upload an image to an existing texture, replacing its content. Invoke
    /// it in your [`ImguiRenderLoop::before_render`] method for updating
    /// textures. The dimensions must match the original upload.
    fn replace_texture(
        &mut self,
        texture_id: TextureId,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<()>;

    /// Release a texture before the renderer is dropped.
    fn unload_texture(&mut self, texture_id: TextureId) -> Result<()>;
}

/// Implement your `imgui` rendering logic via this trait.
pub trait ImguiRenderLoop {
    /// Called once, before the first frame. Implement this to initialize your
    /// data. `ctx` is the imgui context, and `render_context` gives access to
    /// texture management.
    fn initialize(&mut self, _ctx: &mut Context, _render_context: &mut dyn RenderContext) {}

    /// Called before rendering each frame. Use the provided `ctx` object to
    /// modify imgui settings before rendering the UI.
    fn before_render(&mut self, _ctx: &mut Context, _render_context: &mut dyn RenderContext) {}

    /// Called every frame. Use the provided `ui` object to build your UI.
    fn render(&mut self, ui: &mut Ui);
}
