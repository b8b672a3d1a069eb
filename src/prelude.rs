//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use coin_dash::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GameState, GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, ActionState, InputEvent, InputSystem, KeyCode, StateTracker, Trigger};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager, SceneTransition, TransitionQueue};

// World
pub use crate::core::world::{Axis, Contact, Entity, EntityFactory, EntityId, FrameContext, Viewport, World, WorldCommands};

// Physics and rendering
pub use crate::core::physics::{Body, LevelGeometry, Rect, Vec2};
pub use crate::core::render::{Align, BitmapFont, Color, FrameBuffer, Surface};

// Errors
pub use crate::error::{AssetError, ConfigError, GameError};
