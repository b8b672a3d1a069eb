//=========================================================================
// Input System
//=========================================================================
//
// High-level interface for input handling within the engine.
//
// Architecture:
//   frame events → StateTracker (keys held/pressed) → ActionMapper
//                → ActionState (read by screens and entities)
//
// The input system only owns the bindings. The tracker and the action
// snapshot live in the GlobalContext so that screens and entities can
// read them during the update phase.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, ActionState, Trigger};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== Internal Dependencies ===============================================

use action_mapper::ActionMapper;

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== InputSystem =========================================================

/// Binds physical keys to game actions and resolves them every frame.
///
/// # Example
///
/// ```
/// use coin_dash::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MyAction { Jump }
/// impl Action for MyAction {}
///
/// let mut input = InputSystem::<MyAction>::new();
/// input.bind_key(KeyCode::KeyX, MyAction::Jump, Trigger::Pressed);
///
/// let mut tracker = StateTracker::new();
/// let mut actions = ActionState::new();
/// input.process_frame(&mut tracker, &mut actions, &[InputEvent::KeyDown(KeyCode::KeyX)]);
/// assert!(actions.is_active(MyAction::Jump));
/// ```
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    /// Creates an input system with no bindings.
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action` with the given trigger mode.
    pub fn bind_key(&mut self, key: KeyCode, action: A, trigger: Trigger) {
        debug!("Binding {:?} → {:?} ({:?})", key, action, trigger);
        self.mapper.bind_key(key, action, trigger);
    }

    /// Removes the binding of `key`.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Returns the action and trigger bound to `key`.
    pub fn binding(&self, key: KeyCode) -> Option<(A, Trigger)> {
        self.mapper.binding(key)
    }

    /// Number of bound keys.
    pub fn binding_count(&self) -> usize {
        self.mapper.len()
    }

    //--- Frame Processing -------------------------------------------------

    /// Feeds one frame of events into `tracker` and resolves `actions`.
    pub fn process_frame(
        &self,
        tracker: &mut StateTracker,
        actions: &mut ActionState<A>,
        events: &[InputEvent],
    ) {
        tracker.clear();
        tracker.process_events(events);
        self.mapper.resolve(tracker, actions);

        if !events.is_empty() {
            trace!("Processed {} input events, active actions: {:?}", events.len(), actions);
        }
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
