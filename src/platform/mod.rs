//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) and pixels (presentation) with the
// engine's frame loop.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ↓ KeyboardInput                            │
//  │  InputProcessor (Winit → InputEvent)         │
//  │   ↓                                          │
//  │  InputBuffer                                 │
//  │   ↓ RedrawRequested (frame boundary)         │
//  │  Loading: Preloader::poll → progress bar     │
//  │  Running: FrameClock → Engine::tick(1.0) × n  │
//  │           → Engine::render                   │
//  │   ↓                                          │
//  │  FrameBuffer → pixels → window               │
//  └──────────────────────────────────────────────┘
//           ↑
//           │ LoadEvent (crossbeam channel)
//     preloader thread
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all input received since the
//   previous redraw is handed to the engine at once
// - **Fixed ticks**: the game advances in whole ticks of 1/fps seconds,
//   so motion is the same on a 60 Hz and a 144 Hz display. A slow redraw
//   catches up by at most the engine's max steps
// - **Present only when dirty**: the pixel surface is only re-rendered
//   if the tick reported a change (or the window was resized)
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod frame_clock;
mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::config::DisplayConfig;
use crate::core::assets::{LoadStatus, Preloader};
use crate::core::physics::Rect;
use crate::core::render::{Color, FrameBuffer, Surface};
use crate::core::{Action, SceneKey};
use crate::engine::{Engine, OnLoaded};
use crate::error::GameError;
use frame_clock::FrameClock;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Phase ===============================================================

/// What the platform does on each redraw.
enum Phase<S: SceneKey, A: Action> {
    /// Waiting for the preloader; shows a progress bar.
    Loading {
        preloader: Preloader,
        on_loaded: OnLoaded<S, A>,
    },

    /// Game frames.
    Running,
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(engine, ...)`, no window yet
/// 2. **resumed()**: window + pixel surface are created
/// 3. **RedrawRequested**: loading step or game frame
/// 4. **Shutdown**: window closed or fatal error → event loop exits,
///    `into_result()` reports the outcome
pub(crate) struct Platform<S: SceneKey, A: Action> {
    engine: Engine<S, A>,
    display: DisplayConfig,
    phase: Phase<S, A>,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    frame: FrameBuffer,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    clock: FrameClock,
    last_frame: Option<Instant>,
    force_redraw: bool,
    error: Option<GameError>,
}

impl<S: SceneKey, A: Action> Platform<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new(
        engine: Engine<S, A>,
        display: DisplayConfig,
        preloader: Preloader,
        on_loaded: OnLoaded<S, A>,
    ) -> Self {
        let (width, height) = engine.view_size();
        info!(target: "platform", "Platform subsystem initialized ({}x{})", width, height);

        let clock = FrameClock::new(display.frame_time(), engine.max_steps());

        Self {
            engine,
            display,
            phase: Phase::Loading { preloader, on_loaded },
            window: None,
            pixels: None,
            frame: FrameBuffer::new(width, height),
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            clock,
            last_frame: None,
            force_redraw: true,
            error: None,
        }
    }

    /// Outcome of the event loop: the fatal error that stopped it, if any.
    pub fn into_result(self) -> Result<(), GameError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_display(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GameError> {
        let (width, height) = self.engine.view_size();
        let scale = self.display.scale.max(1);

        let mut attrs = WindowAttributes::default()
            .with_title(self.display.title.clone())
            .with_inner_size(LogicalSize::new(width * scale, height * scale))
            .with_min_inner_size(LogicalSize::new(width, height));
        if self.display.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| GameError::DisplayInit(e.to_string()))?,
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface).map_err(|e| GameError::DisplayInit(e.to_string()))?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// One redraw: loading step or game frame. Returns `false` on a
    /// presentation failure.
    fn frame(&mut self) -> bool {
        let steps = self.next_steps();

        let loading = match &mut self.phase {
            Phase::Loading { preloader, .. } => {
                Some(preloader.poll(&mut self.engine.context_mut().assets).unwrap_or_else(|e| {
                    error!(target: "platform", "Preloading aborted: {}", e);
                    LoadStatus::Complete
                }))
            }
            Phase::Running => None,
        };

        let present = match loading {
            Some(status @ LoadStatus::Loading { .. }) => {
                draw_loading_bar(&mut self.frame, status.progress());
                true
            }
            Some(LoadStatus::Complete) => {
                self.enter_running();
                self.run_ticks(steps)
            }
            None => self.run_ticks(steps),
        };

        if present || self.force_redraw {
            self.force_redraw = false;
            return self.present();
        }
        true
    }

    fn enter_running(&mut self) {
        let previous = std::mem::replace(&mut self.phase, Phase::Running);
        if let Phase::Loading { preloader, on_loaded } = previous {
            info!(
                target: "platform",
                "Resources ready ({} of {} loaded), starting game",
                preloader.total() - preloader.failed(),
                preloader.total()
            );
            self.engine.finish_loading(on_loaded);
        }
    }

    /// Runs `steps` fixed ticks and renders if anything changed.
    ///
    /// Buffered input goes to the first tick; with no tick due it waits
    /// for the next redraw.
    fn run_ticks(&mut self, steps: u32) -> bool {
        let mut dirty = self.force_redraw;

        for step in 0..steps {
            if step == 0 && !self.buffer.is_empty() {
                trace!(target: "platform::input", "Flushing {} input events", self.buffer.len());
                self.engine.push_events(self.buffer.drain());
            }
            dirty |= self.engine.tick(1.0);
        }

        if dirty {
            self.engine.render(&mut self.frame);
        }
        dirty
    }

    fn present(&mut self) -> bool {
        let Some(pixels) = self.pixels.as_mut() else {
            return true;
        };

        self.frame.copy_into(pixels.frame_mut());
        if let Err(e) = pixels.render() {
            error!(target: "platform", "Presentation failed: {}", e);
            return false;
        }
        true
    }

    /// Ticks due since the previous redraw; the first redraw runs one.
    fn next_steps(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = self.last_frame.map(|last| now - last);
        self.last_frame = Some(now);

        match elapsed {
            Some(elapsed) => self.clock.advance(elapsed),
            None => 1,
        }
    }
}

//=== Winit Integration ===================================================

impl<S: SceneKey, A: Action> ApplicationHandler for Platform<S, A> {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_display(event_loop) {
            error!(target: "platform", "{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                        event_loop.exit();
                        return;
                    }
                }
                self.force_redraw = true;
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.frame() {
                    event_loop.exit();
                    return;
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Focused, CursorMoved, etc.
            }
        }
    }
}

//=== Helpers =============================================================

/// Draws the preloading progress bar centered on the surface.
fn draw_loading_bar(surface: &mut dyn Surface, progress: f32) {
    let (width, height) = surface.size();
    let (width, height) = (width as f32, height as f32);
    let bar_width = (width * 0.5).floor();
    let bar = Rect::new(((width - bar_width) * 0.5).floor(), (height * 0.5).floor(), bar_width, 4.0);

    surface.clear(Color::BLACK);
    surface.fill_rect(
        Rect::new(bar.x, bar.y, (bar.w * progress.clamp(0.0, 1.0)).floor(), bar.h),
        Color::WHITE,
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::core::assets::ResourceManifest;
    use crate::engine::EngineBuilder;
    use crate::core::scene::SceneTransition;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    fn platform(on_loaded: OnLoaded<TestScene, TestAction>) -> (Platform<TestScene, TestAction>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let preloader = Preloader::spawn(dir.path(), ResourceManifest::default(), vec!["ogg".to_string()]);
        let engine = EngineBuilder::new().with_view_size(40, 20).build();
        (Platform::new(engine, DisplayConfig::default(), preloader, on_loaded), dir)
    }

    #[test]
    fn platform_creation_is_lazy() {
        let (platform, _dir) = platform(Box::new(|_, _| {}));
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.pixels.is_none());
        assert!(matches!(platform.phase, Phase::Loading { .. }));
    }

    #[test]
    fn loading_completes_into_running() {
        let (mut platform, _dir) = platform(Box::new(|_, ctx| {
            ctx.state.score = 42;
            ctx.scene_transitions.push(SceneTransition::Change(TestScene::Main));
        }));

        // Empty manifest: the worker finishes almost immediately
        let deadline = Instant::now() + Duration::from_secs(5);
        while matches!(platform.phase, Phase::Loading { .. }) && Instant::now() < deadline {
            assert!(platform.frame());
            std::thread::sleep(Duration::from_millis(1));
        }

        assert!(matches!(platform.phase, Phase::Running));
        assert_eq!(platform.engine.context().state.score, 42);
    }

    #[test]
    fn input_waits_for_a_due_tick() {
        use crate::core::input::{InputEvent, KeyCode, Trigger};

        let (mut platform, _dir) = platform(Box::new(|_, _| {}));
        platform.enter_running();
        platform
            .engine
            .systems_mut()
            .input
            .bind_key(KeyCode::KeyX, TestAction::Jump, Trigger::Pressed);
        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyX));

        platform.run_ticks(0);
        assert_eq!(platform.buffer.len(), 1);
        assert!(!platform.engine.context().actions.is_active(TestAction::Jump));

        platform.run_ticks(2);
        assert!(platform.buffer.is_empty());
        // Pressed only fires on the tick that saw the key go down
        assert!(!platform.engine.context().actions.is_active(TestAction::Jump));
        assert!(platform.engine.context().input_state.is_key_down(KeyCode::KeyX));
    }

    #[test]
    fn loading_bar_reflects_progress() {
        let mut fb = FrameBuffer::new(40, 20);

        draw_loading_bar(&mut fb, 0.0);
        assert_eq!(fb.count(Color::WHITE), 0);

        draw_loading_bar(&mut fb, 0.5);
        assert_eq!(fb.count(Color::WHITE), 10 * 4);

        draw_loading_bar(&mut fb, 1.0);
        assert_eq!(fb.count(Color::WHITE), 20 * 4);
    }
}
