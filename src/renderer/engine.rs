use imgui::internal::RawWrapper;
use imgui::{Context, DrawCmd, DrawData, DrawIdx, DrawList, DrawVert, TextureId};
use tracing::{debug, error};

use crate::renderer::{RenderEngine, Rlgl};
use crate::{Error, RenderContext, Result};

/// Replays dear imgui draw data through [`Rlgl`] and owns the textures it
/// uploaded, font atlas included. They are released when the engine is
/// dropped.
pub struct RlglRenderEngine<G: Rlgl> {
    rlgl: G,
    texture_heap: TextureHeap,
    font_texture: Option<TextureId>,
}

impl<G: Rlgl> RlglRenderEngine<G> {
    /// Wrap a [`Rlgl`] implementation.
    pub fn new(ctx: &mut Context, rlgl: G) -> Self {
        ctx.set_renderer_name(String::from(concat!("rlimgui-rlgl@", env!("CARGO_PKG_VERSION"))));

        Self { rlgl, texture_heap: TextureHeap::new(), font_texture: None }
    }

    /// The texture currently holding the font atlas.
    pub fn font_texture(&self) -> Option<TextureId> {
        self.font_texture
    }

    /// Access the underlying drawing API.
    pub fn rlgl(&self) -> &G {
        &self.rlgl
    }

    /// Mutably access the underlying drawing API.
    pub fn rlgl_mut(&mut self) -> &mut G {
        &mut self.rlgl
    }

    fn render_draw_data(&mut self, draw_data: &DrawData) {
        let display_pos = draw_data.display_pos;
        let framebuffer_scale = draw_data.framebuffer_scale;
        let display_height = draw_data.display_size[1];

        self.rlgl.draw_render_batch_active();
        self.rlgl.disable_backface_culling();

        // `CmdLists` is null on frames that produced no draw lists.
        if draw_data.draw_lists_count() > 0 {
            for cl in draw_data.draw_lists() {
                self.render_draw_list(cl, display_pos, framebuffer_scale, display_height);
            }
        }

        self.rlgl.set_texture(0);
        self.rlgl.disable_scissor_test();
        self.rlgl.enable_backface_culling();
    }

    fn render_draw_list(
        &mut self,
        cl: &DrawList,
        display_pos: [f32; 2],
        framebuffer_scale: [f32; 2],
        display_height: f32,
    ) {
        let vtx_buffer = cl.vtx_buffer();
        let idx_buffer = cl.idx_buffer();

        for cmd in cl.commands() {
            match cmd {
                DrawCmd::Elements { count, cmd_params } => {
                    let Some(scissor) = scissor_rect(
                        cmd_params.clip_rect,
                        display_pos,
                        framebuffer_scale,
                        display_height,
                    ) else {
                        continue;
                    };

                    let Ok(texture) = u32::try_from(cmd_params.texture_id.id()) else {
                        error!(
                            "Texture id {} does not fit a framework texture id",
                            cmd_params.texture_id.id()
                        );
                        continue;
                    };

                    let range = cmd_params.idx_offset..cmd_params.idx_offset + count;
                    let (Some(indices), Some(vertices)) =
                        (idx_buffer.get(range), vtx_buffer.get(cmd_params.vtx_offset..))
                    else {
                        error!(
                            "Draw command out of buffer bounds: {count} indices at {}",
                            cmd_params.idx_offset
                        );
                        continue;
                    };

                    self.apply_scissor(scissor);
                    emit_triangles(&mut self.rlgl, texture, indices, vertices);
                    self.rlgl.draw_render_batch_active();
                },
                DrawCmd::ResetRenderState => {
                    self.rlgl.draw_render_batch_active();
                    self.rlgl.disable_backface_culling();
                },
                DrawCmd::RawCallback { callback, raw_cmd } => {
                    let clip = unsafe { (*raw_cmd).ClipRect };
                    if let Some(scissor) = scissor_rect(
                        [clip.x, clip.y, clip.z, clip.w],
                        display_pos,
                        framebuffer_scale,
                        display_height,
                    ) {
                        self.apply_scissor(scissor);
                    }
                    unsafe { callback(cl.raw(), raw_cmd) };
                },
            }
        }
    }

    fn apply_scissor(&mut self, [x, y, w, h]: [i32; 4]) {
        self.rlgl.enable_scissor_test();
        self.rlgl.scissor(x, y, w, h);
    }
}

impl<G: Rlgl> RenderContext for RlglRenderEngine<G> {
    fn load_texture(&mut self, data: &[u8], width: u32, height: u32) -> Result<TextureId> {
        self.texture_heap.create_texture(&mut self.rlgl, data, width, height)
    }

    fn replace_texture(
        &mut self,
        texture_id: TextureId,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.texture_heap.update_texture(&mut self.rlgl, texture_id, data, width, height)
    }

    fn unload_texture(&mut self, texture_id: TextureId) -> Result<()> {
        if self.font_texture == Some(texture_id) {
            self.font_texture = None;
        }
        self.texture_heap.destroy_texture(&mut self.rlgl, texture_id)
    }
}

impl<G: Rlgl> RenderEngine for RlglRenderEngine<G> {
    fn render(&mut self, draw_data: &DrawData) -> Result<()> {
        self.render_draw_data(draw_data);
        Ok(())
    }

    fn setup_fonts(&mut self, ctx: &mut Context) -> Result<()> {
        let fonts = ctx.fonts();
        let texture_id = {
            let atlas = fonts.build_rgba32_texture();
            self.texture_heap.create_texture(&mut self.rlgl, atlas.data, atlas.width, atlas.height)?
        };
        fonts.tex_id = texture_id;

        if let Some(previous) = self.font_texture.replace(texture_id) {
            self.texture_heap.destroy_texture(&mut self.rlgl, previous)?;
        }

        debug!("Font atlas uploaded as texture {}", texture_id.id());
        Ok(())
    }
}

impl<G: Rlgl> Drop for RlglRenderEngine<G> {
    fn drop(&mut self) {
        debug!("Releasing {} textures", self.texture_heap.textures.len());
        self.texture_heap.clear(&mut self.rlgl);
    }
}

/// Convert an imgui clip rectangle (`[min_x, min_y, max_x, max_y]` in display
/// coordinates) into a framebuffer scissor box `[x, y, width, height]` with
/// a bottom-left origin. Returns `None` for empty rectangles.
pub(crate) fn scissor_rect(
    clip_rect: [f32; 4],
    display_pos: [f32; 2],
    framebuffer_scale: [f32; 2],
    display_height: f32,
) -> Option<[i32; 4]> {
    let [min_x, min_y, max_x, max_y] = clip_rect;
    let [sx, sy] = framebuffer_scale;

    let x = min_x - display_pos[0];
    let y = min_y - display_pos[1];
    let width = max_x - min_x;
    let height = max_y - min_y;

    if width <= 0. || height <= 0. {
        return None;
    }

    Some([
        (x * sx) as i32,
        ((display_height - (y + height)) * sy) as i32,
        (width * sx) as i32,
        (height * sy) as i32,
    ])
}

/// Submit an indexed triangle list one vertex at a time, reopening the
/// primitive whenever the framework flushes its batch.
pub(crate) fn emit_triangles<G: Rlgl + ?Sized>(
    rlgl: &mut G,
    texture: u32,
    indices: &[DrawIdx],
    vertices: &[DrawVert],
) {
    if indices.len() < 3 {
        return;
    }

    rlgl.begin_triangles();
    rlgl.set_texture(texture);

    for triangle in indices.chunks_exact(3) {
        let (Some(a), Some(b), Some(c)) = (
            vertices.get(triangle[0] as usize),
            vertices.get(triangle[1] as usize),
            vertices.get(triangle[2] as usize),
        ) else {
            error!("Triangle {triangle:?} references missing vertices");
            continue;
        };

        if rlgl.check_render_batch_limit(3) {
            rlgl.begin_triangles();
            rlgl.set_texture(texture);
        }

        emit_vertex(rlgl, a);
        emit_vertex(rlgl, b);
        emit_vertex(rlgl, c);
    }

    rlgl.end();
}

fn emit_vertex<G: Rlgl + ?Sized>(rlgl: &mut G, vertex: &DrawVert) {
    let [r, g, b, a] = vertex.col;
    rlgl.color4ub(r, g, b, a);
    rlgl.tex_coord2f(vertex.uv[0], vertex.uv[1]);
    rlgl.vertex2f(vertex.pos[0], vertex.pos[1]);
}

struct TextureHeap {
    textures: Vec<Texture>,
}

struct Texture {
    id: u32,
    width: u32,
    height: u32,
}

impl TextureHeap {
    fn new() -> Self {
        Self { textures: Vec::new() }
    }

    fn position(&self, texture_id: TextureId) -> Result<usize> {
        self.textures
            .iter()
            .position(|t| t.id as usize == texture_id.id())
            .ok_or(Error::UnknownTexture(texture_id))
    }

    fn create_texture<G: Rlgl>(
        &mut self,
        rlgl: &mut G,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<TextureId> {
        check_rgba_len(data, width, height)?;

        let Some(id) = rlgl.load_texture(data, width, height) else {
            error!("Could not upload a {width}x{height} texture");
            return Err(Error::TextureUpload { width, height });
        };

        self.textures.push(Texture { id, width, height });
        Ok(TextureId::new(id as usize))
    }

    fn update_texture<G: Rlgl>(
        &mut self,
        rlgl: &mut G,
        texture_id: TextureId,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<()> {
        let texture = &self.textures[self.position(texture_id)?];

        if [texture.width, texture.height] != [width, height] {
            return Err(Error::TextureSizeMismatch {
                id: texture_id,
                expected: [texture.width, texture.height],
                actual: [width, height],
            });
        }
        check_rgba_len(data, width, height)?;

        rlgl.update_texture(texture.id, data, width, height);
        Ok(())
    }

    fn destroy_texture<G: Rlgl>(&mut self, rlgl: &mut G, texture_id: TextureId) -> Result<()> {
        let texture = self.textures.swap_remove(self.position(texture_id)?);
        rlgl.unload_texture(texture.id);
        Ok(())
    }

    fn clear<G: Rlgl>(&mut self, rlgl: &mut G) {
        for texture in self.textures.drain(..) {
            rlgl.unload_texture(texture.id);
        }
    }
}

fn check_rgba_len(data: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(Error::InvalidTextureData { expected, actual: data.len() });
    }
    Ok(())
}
