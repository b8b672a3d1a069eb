//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - state: GameState (score)
// - input_state / actions: this frame's keyboard state and actions
// - scene_transitions: Command queue for scene changes
// - world / viewport: entities of the loaded level and the camera
// - assets / factory: preloaded resources and entity constructors
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::GameState;
use crate::core::assets::AssetStore;
use crate::core::input::{Action, ActionState, InputEvent, StateTracker};
use crate::core::physics::Vec2;
use crate::core::scene::{SceneKey, TransitionQueue};
use crate::core::world::{EntityFactory, Viewport, World};

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` in their lifecycle methods. This
/// separates scene-accessible data from the engine systems that drive
/// them.
pub struct GlobalContext<S: SceneKey, A: Action> {
    /// Frame-tick ratio of the current frame.
    pub dt: f32,

    pub state: GameState,

    /// Raw keyboard state for low-level queries.
    pub input_state: StateTracker,

    /// Actions resolved from the bindings this frame.
    pub actions: ActionState<A>,

    /// Scenes and entities queue transitions here during updates. The
    /// scene manager processes this queue at the end of the frame.
    pub scene_transitions: TransitionQueue<S>,

    pub world: World<S, A>,
    pub viewport: Viewport,
    pub assets: AssetStore,
    pub factory: EntityFactory<S, A>,

    /// Input events for the current frame.
    ///
    /// Filled by the platform and consumed by the InputSystem. Not
    /// meant for scenes (use `input_state` or `actions` instead).
    pub(crate) frame_events: Vec<InputEvent>,
}

impl<S: SceneKey, A: Action> GlobalContext<S, A> {
    /// Creates a new context with empty state and a viewport of
    /// `view_size` pixels.
    pub fn new(view_size: Vec2) -> Self {
        Self {
            dt: 1.0,
            state: GameState::new(),
            input_state: StateTracker::new(),
            actions: ActionState::new(),
            scene_transitions: TransitionQueue::new(),
            world: World::new(),
            viewport: Viewport::new(view_size),
            assets: AssetStore::new(),
            factory: EntityFactory::new(),
            frame_events: Vec::new(),
        }
    }

    /// Loads the level `name` from the asset store into the world.
    ///
    /// Returns `false` (and logs) if no such level was loaded.
    pub fn load_level(&mut self, name: &str) -> bool {
        let Some(def) = self.assets.level(name) else {
            warn!("Level '{}' is not loaded", name);
            return false;
        };
        self.world.load_level(&def, &self.factory, &self.assets, &mut self.viewport);
        true
    }

    /// Runs one world frame with this context's data.
    pub fn update_world(&mut self) -> bool {
        self.world.update(
            self.dt,
            &self.actions,
            &mut self.state,
            &mut self.scene_transitions,
            &mut self.viewport,
        )
    }

    /// Queues input events for the next update.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.frame_events.extend(events);
    }
}
