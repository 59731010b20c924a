use imgui::{Condition, Context};
use raylib::prelude::*;
use rlimgui::platform::raylib::{RaylibClipboard, RaylibPlatform};
use rlimgui::renderer::backend::raylib::RaylibRlgl;
use rlimgui::{Config, ImguiRenderLoop, RenderContext, RlImGui};
use tracing::metadata::LevelFilter;

struct HelloWorld {
    show_demo_window: bool,
    checkerboard: Option<imgui::TextureId>,
}

impl HelloWorld {
    fn new() -> Self {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_file(true)
            .with_line_number(true)
            .init();

        HelloWorld { show_demo_window: true, checkerboard: None }
    }
}

impl ImguiRenderLoop for HelloWorld {
    fn initialize(&mut self, _ctx: &mut Context, render_context: &mut dyn RenderContext) {
        let pixels: Vec<u8> = (0..64 * 64)
            .flat_map(|i| {
                let (x, y) = (i % 64 / 8, i / 64 / 8);
                if (x + y) % 2 == 0 { [230, 230, 230, 255] } else { [40, 40, 40, 255] }
            })
            .collect();
        self.checkerboard = render_context.load_texture(&pixels, 64, 64).ok();
    }

    fn render(&mut self, ui: &mut imgui::Ui) {
        if self.show_demo_window {
            ui.show_demo_window(&mut self.show_demo_window);
        }

        ui.window("Hello world")
            .size([300.0, 200.0], Condition::FirstUseEver)
            .position([16.0, 16.0], Condition::FirstUseEver)
            .build(|| {
                ui.text("Hello world!");
                ui.text("This...is...imgui-rs on raylib!");
                ui.separator();
                let mouse_pos = ui.io().mouse_pos;
                ui.text(format!("Mouse Position: ({:.1},{:.1})", mouse_pos[0], mouse_pos[1]));
                ui.checkbox("Demo window", &mut self.show_demo_window);

                if let Some(tex_id) = self.checkerboard {
                    imgui::Image::new(tex_id, [64.0, 64.0]).build(ui);
                }
            });
    }
}

fn main() -> rlimgui::Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(1280, 800)
        .title("rlimgui hello world")
        .resizable()
        .vsync()
        .build();

    let mut rlimgui =
        RlImGui::builder(RaylibPlatform::new(&rl), RaylibRlgl::new(&rl), Config::default())
            .with_clipboard(RaylibClipboard)
            .build()?;
    let mut hello = HelloWorld::new();

    while !rl.window_should_close() {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);

        rlimgui.run_frame(&mut hello)?;
    }

    Ok(())
}
