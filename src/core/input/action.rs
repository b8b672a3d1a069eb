//=========================================================================
// Action Trait, Trigger & Action State
//=========================================================================
//
// Game-defined action trait and per-binding trigger mode.
//
// Actions: Opaque identifiers routed by the engine, interpreted by the game.
// Trigger: Whether a binding fires while held or once per press.
// ActionState: The set of actions active during the current frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level gameplay commands (Left, Jump, Restart)
/// mapped from raw inputs. The engine routes actions without interpreting them.
///
/// # Example
///
/// ```
/// use coin_dash::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MyAction { Jump, Restart }
///
/// impl Action for MyAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== Trigger =============================================================

/// How a key binding activates its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trigger {
    /// Active on every frame the key is held.
    #[default]
    Held,

    /// Active only on the frame the key goes down (edge-triggered).
    ///
    /// Holding the key does not re-trigger the action.
    Pressed,
}

//=== ActionState =========================================================

/// Snapshot of the actions active during one frame.
#[derive(Debug, Clone)]
pub struct ActionState<A: Action> {
    active: HashSet<A>,
}

impl<A: Action> ActionState<A> {
    /// Creates an empty snapshot (no action active).
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
        }
    }

    /// Returns `true` if `action` is active this frame.
    pub fn is_active(&self, action: A) -> bool {
        self.active.contains(&action)
    }

    /// Marks `action` as active.
    pub fn activate(&mut self, action: A) {
        self.active.insert(action);
    }

    /// Deactivates every action.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Returns an iterator over the active actions.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.active.iter()
    }

    /// Returns `true` if no action is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<A: Action> Default for ActionState<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> FromIterator<A> for ActionState<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        Shoot,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_send_and_static() {
        fn assert_send_static<T: Send + 'static>() {}
        assert_send_static::<TestAction>();
    }

    #[test]
    fn trigger_default_is_held() {
        assert_eq!(Trigger::default(), Trigger::Held);
    }

    #[test]
    fn empty_state_has_no_active_action() {
        let state = ActionState::<TestAction>::new();
        assert!(state.is_empty());
        assert!(!state.is_active(TestAction::Jump));
    }

    #[test]
    fn activate_and_clear() {
        let mut state = ActionState::new();
        state.activate(TestAction::Jump);
        state.activate(TestAction::Jump);

        assert!(state.is_active(TestAction::Jump));
        assert!(!state.is_active(TestAction::Shoot));
        assert_eq!(state.iter().count(), 1);

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn collect_from_iterator() {
        let state: ActionState<TestAction> = [TestAction::Jump, TestAction::Shoot]
            .into_iter()
            .collect();
        assert!(state.is_active(TestAction::Jump));
        assert!(state.is_active(TestAction::Shoot));
    }
}
