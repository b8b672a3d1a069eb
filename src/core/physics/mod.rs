//=========================================================================
// Physics
//=========================================================================
//
// Minimal platformer physics: AABB shapes, per-frame body integration
// and resolution against the static solids of the loaded level.
//
//=========================================================================

//=== Module Declarations =================================================

mod body;
mod shape;

//=== Public API ==========================================================

pub use body::{Body, LevelGeometry};
pub use shape::{Rect, Vec2};
