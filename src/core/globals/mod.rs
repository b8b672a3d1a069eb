//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: InputSystem + SceneManager (owned by the engine)
//   GlobalContext: GameState + input + World + assets (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod game_state;
mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use game_state::GameState;
pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
