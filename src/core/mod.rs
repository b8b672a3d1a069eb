//=========================================================================
// Engine Core
//=========================================================================
//
// Platform-independent building blocks the game is made of.
//
// Architecture:
//   input    → keys, actions, bindings
//   scene    → screen state machine and transition queue
//   world    → entities, collision pass, factory, viewport
//   physics  → shapes and kinematic bodies
//   render   → software surface and bitmap font
//   assets   → manifest, levels, preloader
//   globals  → GlobalSystems (logic) + GlobalContext (data)
//
// Nothing in here depends on winit or pixels; the `platform` module
// bridges the core to the window.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod globals;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;
pub mod world;

//=== Public API ==========================================================

pub use globals::{GameState, GlobalContext, GlobalSystems};
pub use input::Action;
pub use scene::SceneKey;
