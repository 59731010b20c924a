use imgui::Condition;
use raylib::prelude::*;
use rlimgui::image::{self, RenderTexture};
use rlimgui::platform::raylib::{RaylibClipboard, RaylibPlatform};
use rlimgui::renderer::backend::raylib::RaylibRlgl;
use rlimgui::{Config, RlImGui, Theme};

fn main() -> rlimgui::Result<()> {
    tracing_subscriber::fmt().with_file(true).with_line_number(true).init();

    let (mut rl, thread) = raylib::init()
        .size(1280, 800)
        .title("rlimgui render texture viewer")
        .resizable()
        .vsync()
        .build();

    let mut rlimgui = RlImGui::builder(
        RaylibPlatform::new(&rl),
        RaylibRlgl::new(&rl),
        Config::default().with_theme(Theme::Light),
    )
    .with_clipboard(RaylibClipboard)
    .build()?;

    let mut scene = rl.load_render_texture(&thread, 640, 360).expect("render texture");
    let mut angle = 0.0f32;

    while !rl.window_should_close() {
        angle += rl.get_frame_time() * 90.0;

        {
            let mut d = rl.begin_texture_mode(&thread, &mut scene);
            d.clear_background(Color::SKYBLUE);
            d.draw_rectangle_pro(
                Rectangle::new(320.0, 180.0, 160.0, 160.0),
                Vector2::new(80.0, 80.0),
                angle,
                Color::MAROON,
            );
            d.draw_text("rendered offscreen", 10, 10, 20, Color::BLACK);
        }

        let viewport = RenderTexture::from(*scene);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);

        rlimgui.frame(|ui| {
            ui.window("Viewport")
                .size([660.0, 420.0], Condition::FirstUseEver)
                .position([16.0, 16.0], Condition::FirstUseEver)
                .build(|| image::image_render_texture_fit(ui, &viewport, true));

            ui.window("Thumbnail")
                .size([360.0, 260.0], Condition::FirstUseEver)
                .position([700.0, 16.0], Condition::FirstUseEver)
                .build(|| image::image_render_texture(ui, &viewport));
        })?;
    }

    Ok(())
}
