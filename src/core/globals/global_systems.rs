//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input and manage scenes. Systems
// operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::render::Surface;
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key bindings and action resolution
/// - `scene_manager`: Screen state machine
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// Resolves the frame's key events into actions.
    pub input: InputSystem<A>,

    /// Owns the screens and the transition table.
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    pub fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current frame.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: frame events → input state → actions
    /// 2. **Scene Update**: the active scene updates (and drives the world)
    /// 3. **Transition Processing**: queued scene changes are applied
    ///
    /// Returns `true` if anything visible changed.
    pub fn update(&mut self, ctx: &mut GlobalContext<S, A>) -> bool {
        // 1. Process input events into state and actions
        let events = std::mem::take(&mut ctx.frame_events);
        self.input.process_frame(&mut ctx.input_state, &mut ctx.actions, &events);

        // 2. Update the active scene
        let dirty = self.scene_manager.update(ctx);

        // 3. Process scene transitions
        let changed = self.scene_manager.process_transitions(ctx);

        dirty || changed
    }

    /// Renders the active scene.
    pub fn render(&self, ctx: &GlobalContext<S, A>, surface: &mut dyn Surface) {
        self.scene_manager.render(ctx, surface);
    }
}

impl<S: SceneKey, A: Action> Default for GlobalSystems<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
