//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys to game actions based on configured bindings.
//
// Architecture:
//   key → HashMap → (action, trigger) → ActionState
//
// Several keys may drive the same action; a key drives a single action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, ActionState, Trigger},
    event::KeyCode,
    state_tracker::StateTracker,
};

//=== Binding =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding<A: Action> {
    action: A,
    trigger: Trigger,
}

//=== ActionMapper ========================================================

/// Resolves the keyboard state of a frame into active actions.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, Binding<A>>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action. Rebinding a key replaces the old binding.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A, trigger: Trigger) {
        if let Some(old) = self.key_bindings.insert(key, Binding { action, trigger }) {
            debug!("Key {:?} rebound from {:?} to {:?}", key, old.action, action);
        }
    }

    /// Removes the binding of a key (no-op if unbound).
    pub(crate) fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    /// Returns the action bound to `key`, if any.
    pub(crate) fn binding(&self, key: KeyCode) -> Option<(A, Trigger)> {
        self.key_bindings.get(&key).map(|b| (b.action, b.trigger))
    }

    /// Number of bound keys.
    pub(crate) fn len(&self) -> usize {
        self.key_bindings.len()
    }

    //--- Resolution -------------------------------------------------------

    /// Writes the actions active this frame into `out` (cleared first).
    pub(crate) fn resolve(&self, tracker: &StateTracker, out: &mut ActionState<A>) {
        out.clear();

        for (&key, binding) in &self.key_bindings {
            let active = match binding.trigger {
                Trigger::Held => tracker.is_key_down(key) || tracker.is_key_pressed(key),
                Trigger::Pressed => tracker.is_key_pressed(key),
            };

            if active {
                out.activate(binding.action);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::InputEvent;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Left,
        Jump,
    }

    impl Action for TestAction {}

    fn step(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    fn resolve(mapper: &ActionMapper<TestAction>, tracker: &StateTracker) -> ActionState<TestAction> {
        let mut out = ActionState::new();
        mapper.resolve(tracker, &mut out);
        out
    }

    #[test]
    fn held_binding_stays_active_while_key_is_down() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::Left, Trigger::Held);
        let mut tracker = StateTracker::new();

        step(&mut tracker, &[InputEvent::KeyDown(KeyCode::ArrowLeft)]);
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Left));

        step(&mut tracker, &[]);
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Left));

        step(&mut tracker, &[InputEvent::KeyUp(KeyCode::ArrowLeft)]);
        assert!(!resolve(&mapper, &tracker).is_active(TestAction::Left));
    }

    #[test]
    fn pressed_binding_fires_once_per_press() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyX, TestAction::Jump, Trigger::Pressed);
        let mut tracker = StateTracker::new();

        step(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyX)]);
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Jump));

        // Still held: must not re-trigger
        step(&mut tracker, &[]);
        assert!(!resolve(&mapper, &tracker).is_active(TestAction::Jump));

        step(&mut tracker, &[InputEvent::KeyUp(KeyCode::KeyX)]);
        step(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyX)]);
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Jump));
    }

    #[test]
    fn tap_within_one_frame_activates_held_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::Left, Trigger::Held);
        let mut tracker = StateTracker::new();

        step(
            &mut tracker,
            &[
                InputEvent::KeyDown(KeyCode::ArrowLeft),
                InputEvent::KeyUp(KeyCode::ArrowLeft),
            ],
        );
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Left));
    }

    #[test]
    fn unbound_key_produces_nothing() {
        let mapper = ActionMapper::<TestAction>::new();
        let mut tracker = StateTracker::new();
        step(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        assert!(resolve(&mapper, &tracker).is_empty());
    }

    #[test]
    fn rebinding_replaces_previous() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, TestAction::Left, Trigger::Held);
        mapper.bind_key(KeyCode::Space, TestAction::Jump, Trigger::Pressed);

        assert_eq!(mapper.len(), 1);
        assert_eq!(mapper.binding(KeyCode::Space), Some((TestAction::Jump, Trigger::Pressed)));
    }

    #[test]
    fn two_keys_one_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::Left, Trigger::Held);
        mapper.bind_key(KeyCode::KeyA, TestAction::Left, Trigger::Held);
        let mut tracker = StateTracker::new();

        step(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyA)]);
        assert!(resolve(&mapper, &tracker).is_active(TestAction::Left));
    }

    #[test]
    fn unbind_key_removes_binding() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyX, TestAction::Jump, Trigger::Pressed);
        mapper.unbind_key(KeyCode::KeyX);
        mapper.unbind_key(KeyCode::KeyX);
        assert_eq!(mapper.binding(KeyCode::KeyX), None);
    }
}
