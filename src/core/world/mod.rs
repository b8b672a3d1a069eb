//=========================================================================
// World
//=========================================================================
//
// Entity container of the active level.
//
// Architecture:
//   World
//     ├─ entities: SlotMap<EntityId, Box<dyn Entity>>
//     └─ level: LevelGeometry
//
// Frame flow:
//   Entity::update(FrameContext) → WorldCommands (removals, collision
//   checks) → collision pass → Entity::on_collision → removals →
//   viewport follow
//
// Entities never touch the container directly while it is iterated;
// they queue commands that the world applies between passes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use slotmap::new_key_type;

//=== Internal Dependencies ===============================================

use crate::core::input::Action;
use crate::core::physics::{Rect, Vec2};
use crate::core::render::Surface;
use crate::core::scene::SceneKey;

//=== Module Declarations =================================================

mod container;
mod context;
mod factory;
mod viewport;

//=== Public API ==========================================================

pub use container::World;
pub use context::{FrameContext, WorldCommands};
pub use factory::EntityFactory;
pub use viewport::{Axis, Viewport};

//=== EntityId ============================================================

new_key_type! {
    /// Generational handle of an entity in the [`World`].
    pub struct EntityId;
}

//=== Contact =============================================================

/// The other side of a collision, as seen by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub other: EntityId,
    pub other_kind: &'static str,
}

//=== Entity Trait ========================================================

/// Behavior of anything living in the world.
///
/// Only `kind`, `bounds`, `draw` and `as_any` are required; the other
/// hooks default to a static, non-colliding entity.
pub trait Entity<S: SceneKey, A: Action>: Send {
    /// Factory key / type tag, e.g. `"player"`.
    fn kind(&self) -> &'static str;

    /// Bounds in world space (screen space for floating entities).
    fn bounds(&self) -> Rect;

    /// Whether the collision pass considers this entity.
    fn is_collidable(&self) -> bool {
        true
    }

    /// Persistent entities survive level loads.
    fn is_persistent(&self) -> bool {
        false
    }

    /// Draw order; higher is drawn later.
    fn z_order(&self) -> i32 {
        0
    }

    /// Floating entities are drawn in screen space and ignore the camera.
    fn is_floating(&self) -> bool {
        false
    }

    /// Called once right after the entity got its id.
    fn on_added(&mut self, _id: EntityId, _viewport: &mut Viewport) {}

    /// Per-frame update. Returns `true` if the entity needs a redraw.
    fn update(&mut self, _ctx: &mut FrameContext<'_, S, A>) -> bool {
        false
    }

    /// Called by the collision pass for every overlapping entity.
    fn on_collision(&mut self, _contact: &Contact, _ctx: &mut FrameContext<'_, S, A>) {}

    /// Draws the entity, `offset` converts world to screen coordinates.
    fn draw(&self, surface: &mut dyn Surface, offset: Vec2);

    fn as_any(&self) -> &dyn Any;
}
