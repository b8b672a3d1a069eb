//=========================================================================
// Frame Context
//=========================================================================
//
// Everything an entity may read or change during one update:
//   - read: dt, active actions, viewport, level geometry
//   - write: game state, transition queue, world commands
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{EntityId, Viewport};
use crate::core::globals::GameState;
use crate::core::input::{Action, ActionState};
use crate::core::physics::LevelGeometry;
use crate::core::scene::{SceneKey, TransitionQueue};

//=== WorldCommands =======================================================

/// Requests queued by entities and applied by the world after the
/// update pass.
#[derive(Debug, Default)]
pub struct WorldCommands {
    removals: Vec<EntityId>,
    collision_checks: Vec<EntityId>,
}

impl WorldCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests removal of `id`. Removing a missing entity is a no-op.
    pub fn remove(&mut self, id: EntityId) {
        if !self.removals.contains(&id) {
            self.removals.push(id);
        }
    }

    /// Requests a collision check of `id` against every other entity.
    pub fn check_collisions(&mut self, id: EntityId) {
        if !self.collision_checks.contains(&id) {
            self.collision_checks.push(id);
        }
    }

    pub fn removals(&self) -> &[EntityId] {
        &self.removals
    }

    pub fn collision_checks(&self) -> &[EntityId] {
        &self.collision_checks
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.collision_checks.is_empty()
    }

    pub(crate) fn take_removals(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.removals)
    }

    pub(crate) fn take_collision_checks(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.collision_checks)
    }
}

//=== FrameContext ========================================================

/// Per-entity view of the frame, built by the world for each callback.
pub struct FrameContext<'a, S: SceneKey, A: Action> {
    /// Id of the entity being updated.
    pub id: EntityId,

    /// Frame-tick ratio, 1.0 at the target frame rate.
    pub dt: f32,

    pub actions: &'a ActionState<A>,
    pub state: &'a mut GameState,
    pub viewport: &'a Viewport,
    pub level: &'a LevelGeometry,
    pub transitions: &'a mut TransitionQueue<S>,
    pub commands: &'a mut WorldCommands,
}

impl<S: SceneKey, A: Action> FrameContext<'_, S, A> {
    pub fn id(&self) -> EntityId {
        self.id
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
