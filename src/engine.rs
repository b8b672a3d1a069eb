//=========================================================================
// Engine
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Platform event loop]
//         │                          │
//         ├─ with_view_size()        ├─ init(|systems, ctx|)
//         ├─ with_gravity()          ├─ tick(dt)   (one frame of logic)
//         └─ with_max_steps()        └─ render()   (one frame of drawing)
// ```
//
// The engine itself is platform-free: `tick` and `render` can be driven
// by the winit platform or directly by tests.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::config::DisplayConfig;
use crate::core::assets::Preloader;
use crate::core::input::InputEvent;
use crate::core::physics::Vec2;
use crate::core::render::Surface;
use crate::core::{Action, GlobalContext, GlobalSystems, SceneKey};
use crate::error::GameError;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **View size**: 640 × 480
/// - **Gravity**: 0.98
/// - **Max steps**: 3 ticks per redraw
///
/// # Examples
///
/// ```
/// use coin_dash::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Main }
/// impl SceneKey for Screen {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MyAction { Jump }
/// impl Action for MyAction {}
///
/// let mut engine = EngineBuilder::<Screen, MyAction>::new()
///     .with_view_size(320, 240)
///     .with_gravity(0.5)
///     .build()
///     .init(|systems, _ctx| {
///         systems.input.bind_key(KeyCode::KeyX, MyAction::Jump, Trigger::Pressed);
///     });
///
/// assert!(!engine.tick(1.0));
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    view_size: (u32, u32),
    gravity: f32,
    max_steps: u32,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            view_size: (640, 480),
            gravity: 0.98,
            max_steps: 3,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the logical resolution the game renders at.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_view_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "View size must be positive, got {}x{}", width, height);
        self.view_size = (width, height);
        self
    }

    /// Sets the world gravity (velocity added per frame tick).
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Caps how many fixed ticks the platform runs to catch up after a
    /// slow redraw. Time beyond the cap is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `max_steps` is zero.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        assert!(max_steps > 0, "Max steps must be positive, got {}", max_steps);
        self.max_steps = max_steps;
        self
    }

    /// Applies the display section of the game configuration.
    pub fn with_display(self, display: &DisplayConfig) -> Self {
        self.with_view_size(display.width, display.height)
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S, A> {
        let (width, height) = self.view_size;
        info!("Building engine ({}x{}, gravity {})", width, height, self.gravity);

        let mut context = GlobalContext::new(Vec2::new(width as f32, height as f32));
        context.world.set_gravity(self.gravity);

        Engine {
            systems: GlobalSystems::new(),
            context,
            view_size: self.view_size,
            max_steps: self.max_steps,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Callback run once all resources are preloaded.
pub type OnLoaded<S, A> = Box<dyn FnOnce(&mut GlobalSystems<S, A>, &mut GlobalContext<S, A>)>;

/// Game runtime: engine systems plus the data they operate on.
///
/// # Frame
///
/// ```text
/// tick(dt):   input events → actions → active scene update
///             (world update, collisions, removals) → transitions
/// render():   active scene draws into the surface
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<S, A>,
    view_size: (u32, u32),
    max_steps: u32,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Configures systems and context before the first frame
    /// (key bindings, scene registration, factories...).
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>, &mut GlobalContext<S, A>),
    {
        info!("Initializing engine systems");
        init_fn(&mut self.systems, &mut self.context);
        self
    }

    //--- Frame ------------------------------------------------------------

    /// Queues input events for the next tick.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.context.push_events(events);
    }

    /// Runs one frame of logic. `dt` is the frame-tick ratio.
    ///
    /// Returns `true` if the frame needs to be redrawn.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.context.dt = dt;
        self.systems.update(&mut self.context)
    }

    /// Draws the active scene.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.systems.render(&self.context, surface);
    }

    //--- Accessors --------------------------------------------------------

    pub fn systems(&self) -> &GlobalSystems<S, A> {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut GlobalSystems<S, A> {
        &mut self.systems
    }

    pub fn context(&self) -> &GlobalContext<S, A> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GlobalContext<S, A> {
        &mut self.context
    }

    pub fn view_size(&self) -> (u32, u32) {
        self.view_size
    }

    /// Most fixed ticks run per redraw.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Runs `on_loaded` with the systems and context.
    pub(crate) fn finish_loading(&mut self, on_loaded: OnLoaded<S, A>) {
        on_loaded(&mut self.systems, &mut self.context);
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Window and pixel surface are created on resume
    /// 2. Loading phase: the preloader fills the asset store, a progress
    ///    bar is shown
    /// 3. `on_loaded` registers screens, factories and bindings
    /// 4. Running phase: the due fixed `tick`s, then `render`
    ///
    /// # Errors
    ///
    /// [`GameError::DisplayInit`] if the window or its surface cannot be
    /// created, [`GameError::EventLoop`] if the event loop fails.
    pub fn run<F>(self, display: DisplayConfig, preloader: Preloader, on_loaded: F) -> Result<(), GameError>
    where
        F: FnOnce(&mut GlobalSystems<S, A>, &mut GlobalContext<S, A>) + 'static,
    {
        info!("Starting engine runtime ({} fps)", display.fps);

        let event_loop = EventLoop::new()?;
        let mut platform = Platform::new(self, display, preloader, Box::new(on_loaded));
        event_loop.run_app(&mut platform)?;

        info!("Platform event loop exited");
        platform.into_result()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
