use imgui::{BackendFlags, ClipboardBackend, ConfigFlags, Context, Ui};
use tracing::{debug, error};

use crate::config::{Config, Theme};
use crate::fonts;
use crate::platform::Platform;
use crate::renderer::{input, CursorState, RenderEngine, Rlgl, RlglRenderEngine};
use crate::{Error, ImguiRenderLoop, RenderContext, Result};

const PLATFORM_NAME: &str = "imgui_impl_raylib";

/// A dear imgui context bound to a framework window.
///
/// Owns the context, the [`Platform`] it reads input from and the
/// [`RlglRenderEngine`] it draws with. Dropping it releases the font texture
/// and destroys the context.
pub struct RlImGui<P: Platform, G: Rlgl> {
    // Declared before `ctx`: the engine's textures go first.
    engine: RlglRenderEngine<G>,
    ctx: Context,
    platform: P,
    cursor: CursorState,
    initialized: bool,
}

impl<P: Platform, G: Rlgl> RlImGui<P, G> {
    /// Create a context with the given options and upload its font atlas.
    pub fn setup(platform: P, rlgl: G, config: Config) -> Result<Self> {
        Self::builder(platform, rlgl, config).build()
    }

    /// Create a context, leaving it open for customization before the font
    /// atlas is uploaded.
    pub fn builder(platform: P, rlgl: G, config: Config) -> RlImGuiBuilder<P, G> {
        RlImGuiBuilder::new(platform, rlgl, config)
    }

    /// Rebuild and re-upload the font atlas, after fonts were added to or
    /// removed from [`RlImGui::context_mut`].
    pub fn reload_fonts(&mut self) -> Result<()> {
        self.engine.setup_fonts(&mut self.ctx)
    }

    /// Run one frame: poll input, build the UI with `f`, apply the requested
    /// cursor and draw.
    pub fn frame<F: FnOnce(&mut Ui)>(&mut self, f: F) -> Result<()> {
        input::prepare_frame(self.ctx.io_mut(), &mut self.platform);

        let io = self.ctx.io();
        let [w, h] = io.display_size;
        let [fsw, fsh] = io.display_framebuffer_scale;
        if (w * fsw) <= 0.0 || (h * fsh) <= 0.0 {
            error!("Insufficient display size: {w}x{h}");
            return Err(Error::InvalidDisplaySize { width: w, height: h });
        }

        let ui = self.ctx.new_frame();
        f(ui);

        let cursor = ui.mouse_cursor();
        self.cursor.update(cursor, ui.io(), &mut self.platform);

        let draw_data = self.ctx.render();
        self.engine.render(draw_data)
    }

    /// Run one frame of a [`ImguiRenderLoop`], initializing it on first use.
    pub fn run_frame<R: ImguiRenderLoop + ?Sized>(&mut self, render_loop: &mut R) -> Result<()> {
        if !self.initialized {
            render_loop.initialize(&mut self.ctx, &mut self.engine);
            self.initialized = true;
        }

        render_loop.before_render(&mut self.ctx, &mut self.engine);
        self.frame(|ui| render_loop.render(ui))
    }

    /// The dear imgui context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The dear imgui context, e.g. to add fonts before
    /// [`RlImGui::reload_fonts`].
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// The platform input is read from.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// The render engine.
    pub fn renderer(&self) -> &RlglRenderEngine<G> {
        &self.engine
    }

    /// Texture management for images drawn in the UI.
    pub fn render_context(&mut self) -> &mut dyn RenderContext {
        &mut self.engine
    }
}

impl<P: Platform, G: Rlgl> Drop for RlImGui<P, G> {
    fn drop(&mut self) {
        debug!("Shutting down");
    }
}

/// Builder object for [`RlImGui`].
///
/// Fonts added through [`RlImGuiBuilder::context_mut`] are part of the
/// initial atlas upload.
///
/// ```no_run
/// # fn demo<P: rlimgui::Platform, G: rlimgui::Rlgl>(platform: P, rlgl: G) -> rlimgui::Result<()> {
/// use rlimgui::{Config, RlImGui};
///
/// let mut builder = RlImGui::builder(platform, rlgl, Config::default());
/// builder.context_mut().io_mut().font_global_scale = 1.5;
/// let mut rlimgui = builder.build()?;
///
/// rlimgui.frame(|ui| {
///     ui.text("Hello, raylib!");
/// })?;
/// # Ok(())
/// # }
/// ```
pub struct RlImGuiBuilder<P: Platform, G: Rlgl> {
    engine: RlglRenderEngine<G>,
    ctx: Context,
    platform: P,
}

impl<P: Platform, G: Rlgl> RlImGuiBuilder<P, G> {
    fn new(platform: P, rlgl: G, config: Config) -> Self {
        let mut ctx = Context::create();

        match config.theme {
            Theme::Dark => ctx.style_mut().use_dark_colors(),
            Theme::Light => ctx.style_mut().use_light_colors(),
        };

        fonts::add_fonts(&mut ctx, &config, &platform);

        ctx.set_ini_filename(config.ini_filename.clone());
        ctx.set_platform_name(String::from(PLATFORM_NAME));

        let io = ctx.io_mut();
        io.backend_flags |= BackendFlags::HAS_MOUSE_CURSORS
            | BackendFlags::HAS_SET_MOUSE_POS
            | BackendFlags::RENDERER_HAS_VTX_OFFSET;
        if !config.mouse_cursor_change {
            io.config_flags |= ConfigFlags::NO_MOUSE_CURSOR_CHANGE;
        }
        io.mouse_pos = [0., 0.];

        let engine = RlglRenderEngine::new(&mut ctx, rlgl);

        Self { engine, ctx, platform }
    }

    /// Install a clipboard backend, e.g.
    /// [`RaylibClipboard`](crate::platform::raylib::RaylibClipboard).
    pub fn with_clipboard<C: ClipboardBackend>(mut self, clipboard: C) -> Self {
        self.ctx.set_clipboard_backend(clipboard);
        self
    }

    /// The context being set up.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Upload the font atlas and finish setup.
    pub fn build(self) -> Result<RlImGui<P, G>> {
        let Self { mut engine, mut ctx, platform } = self;

        engine.setup_fonts(&mut ctx)?;
        debug!("{PLATFORM_NAME} initialized");

        Ok(RlImGui { engine, ctx, platform, cursor: CursorState::new(), initialized: false })
    }
}
