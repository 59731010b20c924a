use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use rlimgui::platform::{KeyboardKey, MouseButton, MouseCursor, Platform};
use rlimgui::{Config, RlImGui, Rlgl};

pub type TestRlImGui = RlImGui<MockPlatform, RecordingRlgl>;

/// Build a backend over mocks, returning the shared draw call log.
pub fn setup(config: Config) -> (TestRlImGui, CallLog) {
    setup_with(MockPlatform::default(), config)
}

pub fn setup_with(platform: MockPlatform, config: Config) -> (TestRlImGui, CallLog) {
    let (rlgl, log) = RecordingRlgl::new();
    let rlimgui = RlImGui::setup(platform, rlgl, config).expect("setup");
    (rlimgui, log)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    SetMousePosition([i32; 2]),
    ShowCursor,
    HideCursor,
    SetMouseCursor(MouseCursor),
}

/// A window whose input state is set by the test.
#[derive(Debug)]
pub struct MockPlatform {
    pub screen_size: [i32; 2],
    pub fullscreen: bool,
    pub monitor_size: [i32; 2],
    pub render_size: Option<[i32; 2]>,
    pub dpi: [f32; 2],
    pub high_dpi: bool,
    pub frame_time: f32,
    pub keys_down: HashSet<KeyboardKey>,
    pub chars: VecDeque<char>,
    pub mouse_position: [f32; 2],
    pub buttons_down: HashSet<MouseButton>,
    pub wheel: [f32; 2],
    pub events: Vec<PlatformEvent>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            screen_size: [800, 600],
            fullscreen: false,
            monitor_size: [1920, 1080],
            render_size: None,
            dpi: [1.0, 1.0],
            high_dpi: false,
            frame_time: 1.0 / 60.0,
            keys_down: HashSet::new(),
            chars: VecDeque::new(),
            mouse_position: [0.0, 0.0],
            buttons_down: HashSet::new(),
            wheel: [0.0, 0.0],
            events: Vec::new(),
        }
    }
}

impl MockPlatform {
    pub fn cursor_events(&self) -> Vec<PlatformEvent> {
        self.events
            .iter()
            .copied()
            .filter(|e| !matches!(e, PlatformEvent::SetMousePosition(_)))
            .collect()
    }
}

impl Platform for MockPlatform {
    fn screen_size(&self) -> [i32; 2] {
        self.screen_size
    }

    fn is_window_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn monitor_size(&self) -> [i32; 2] {
        self.monitor_size
    }

    fn render_size(&self) -> Option<[i32; 2]> {
        self.render_size
    }

    fn window_scale_dpi(&self) -> [f32; 2] {
        self.dpi
    }

    fn is_window_high_dpi(&self) -> bool {
        self.high_dpi
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn is_key_down(&self, key: KeyboardKey) -> bool {
        self.keys_down.contains(&key)
    }

    fn char_pressed(&mut self) -> Option<char> {
        self.chars.pop_front()
    }

    fn mouse_position(&self) -> [f32; 2] {
        self.mouse_position
    }

    fn set_mouse_position(&mut self, position: [i32; 2]) {
        self.events.push(PlatformEvent::SetMousePosition(position));
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn mouse_wheel_move(&self) -> [f32; 2] {
        self.wheel
    }

    fn show_cursor(&mut self) {
        self.events.push(PlatformEvent::ShowCursor);
    }

    fn hide_cursor(&mut self) {
        self.events.push(PlatformEvent::HideCursor);
    }

    fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        self.events.push(PlatformEvent::SetMouseCursor(cursor));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RlglCall {
    DrawRenderBatchActive,
    EnableBackfaceCulling,
    DisableBackfaceCulling,
    EnableScissorTest,
    DisableScissorTest,
    Scissor([i32; 4]),
    BeginTriangles,
    End,
    SetTexture(u32),
    Color([u8; 4]),
    TexCoord([f32; 2]),
    Vertex([f32; 2]),
    LoadTexture { id: u32, width: u32, height: u32 },
    UpdateTexture { id: u32, width: u32, height: u32 },
    UnloadTexture(u32),
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<RlglCall>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<RlglCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&RlglCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn contains(&self, call: &RlglCall) -> bool {
        self.0.borrow().contains(call)
    }

    fn push(&self, call: RlglCall) {
        self.0.borrow_mut().push(call);
    }
}

/// Records every call, hands out sequential texture ids starting at 1 and
/// optionally flushes its batch every `batch_limit` vertices.
pub struct RecordingRlgl {
    log: CallLog,
    next_texture: u32,
    pub batch_limit: Option<usize>,
    pending: usize,
    pub fail_uploads: bool,
}

impl RecordingRlgl {
    pub fn new() -> (Self, CallLog) {
        let log = CallLog::default();
        let rlgl = Self {
            log: log.clone(),
            next_texture: 1,
            batch_limit: None,
            pending: 0,
            fail_uploads: false,
        };
        (rlgl, log)
    }
}

impl Rlgl for RecordingRlgl {
    fn draw_render_batch_active(&mut self) {
        self.pending = 0;
        self.log.push(RlglCall::DrawRenderBatchActive);
    }

    fn enable_backface_culling(&mut self) {
        self.log.push(RlglCall::EnableBackfaceCulling);
    }

    fn disable_backface_culling(&mut self) {
        self.log.push(RlglCall::DisableBackfaceCulling);
    }

    fn enable_scissor_test(&mut self) {
        self.log.push(RlglCall::EnableScissorTest);
    }

    fn disable_scissor_test(&mut self) {
        self.log.push(RlglCall::DisableScissorTest);
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.log.push(RlglCall::Scissor([x, y, width, height]));
    }

    fn begin_triangles(&mut self) {
        self.log.push(RlglCall::BeginTriangles);
    }

    fn end(&mut self) {
        self.log.push(RlglCall::End);
    }

    fn set_texture(&mut self, id: u32) {
        self.log.push(RlglCall::SetTexture(id));
    }

    fn check_render_batch_limit(&mut self, vertices: i32) -> bool {
        let vertices = vertices as usize;
        match self.batch_limit {
            Some(limit) if self.pending + vertices > limit => {
                self.log.push(RlglCall::End);
                self.log.push(RlglCall::DrawRenderBatchActive);
                self.pending = vertices;
                true
            },
            _ => {
                self.pending += vertices;
                false
            },
        }
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.log.push(RlglCall::Color([r, g, b, a]));
    }

    fn tex_coord2f(&mut self, u: f32, v: f32) {
        self.log.push(RlglCall::TexCoord([u, v]));
    }

    fn vertex2f(&mut self, x: f32, y: f32) {
        self.log.push(RlglCall::Vertex([x, y]));
    }

    fn load_texture(&mut self, _rgba: &[u8], width: u32, height: u32) -> Option<u32> {
        if self.fail_uploads {
            return None;
        }
        let id = self.next_texture;
        self.next_texture += 1;
        self.log.push(RlglCall::LoadTexture { id, width, height });
        Some(id)
    }

    fn update_texture(&mut self, id: u32, _rgba: &[u8], width: u32, height: u32) {
        self.log.push(RlglCall::UpdateTexture { id, width, height });
    }

    fn unload_texture(&mut self, id: u32) {
        self.log.push(RlglCall::UnloadTexture(id));
    }
}
