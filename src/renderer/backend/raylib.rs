//! [`Rlgl`] over raylib's bundled `rlgl` module.

use std::ffi::c_void;

use raylib::ffi;

use crate::renderer::Rlgl;

const RL_TRIANGLES: i32 = 0x0004;
const PIXELFORMAT_UNCOMPRESSED_R8G8B8A8: i32 = 7;

/// [`Rlgl`] over raylib's `rlgl` module.
#[derive(Debug)]
pub struct RaylibRlgl(());

impl RaylibRlgl {
    /// Bind to the GL context of the current raylib window.
    pub fn new(_handle: &raylib::RaylibHandle) -> Self {
        Self(())
    }
}

impl Rlgl for RaylibRlgl {
    fn draw_render_batch_active(&mut self) {
        unsafe { ffi::rlDrawRenderBatchActive() }
    }

    fn enable_backface_culling(&mut self) {
        unsafe { ffi::rlEnableBackfaceCulling() }
    }

    fn disable_backface_culling(&mut self) {
        unsafe { ffi::rlDisableBackfaceCulling() }
    }

    fn enable_scissor_test(&mut self) {
        unsafe { ffi::rlEnableScissorTest() }
    }

    fn disable_scissor_test(&mut self) {
        unsafe { ffi::rlDisableScissorTest() }
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { ffi::rlScissor(x, y, width, height) }
    }

    fn begin_triangles(&mut self) {
        unsafe { ffi::rlBegin(RL_TRIANGLES) }
    }

    fn end(&mut self) {
        unsafe { ffi::rlEnd() }
    }

    fn set_texture(&mut self, id: u32) {
        unsafe { ffi::rlSetTexture(id) }
    }

    fn check_render_batch_limit(&mut self, vertices: i32) -> bool {
        unsafe { ffi::rlCheckRenderBatchLimit(vertices) }
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        unsafe { ffi::rlColor4ub(r, g, b, a) }
    }

    fn tex_coord2f(&mut self, u: f32, v: f32) {
        unsafe { ffi::rlTexCoord2f(u, v) }
    }

    fn vertex2f(&mut self, x: f32, y: f32) {
        unsafe { ffi::rlVertex2f(x, y) }
    }

    fn load_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Option<u32> {
        let id = unsafe {
            ffi::rlLoadTexture(
                rgba.as_ptr() as *const c_void,
                width as i32,
                height as i32,
                PIXELFORMAT_UNCOMPRESSED_R8G8B8A8,
                1,
            )
        };
        (id != 0).then_some(id)
    }

    fn update_texture(&mut self, id: u32, rgba: &[u8], width: u32, height: u32) {
        unsafe {
            ffi::rlUpdateTexture(
                id,
                0,
                0,
                width as i32,
                height as i32,
                PIXELFORMAT_UNCOMPRESSED_R8G8B8A8,
                rgba.as_ptr() as *const c_void,
            )
        }
    }

    fn unload_texture(&mut self, id: u32) {
        unsafe { ffi::rlUnloadTexture(id) }
    }
}
