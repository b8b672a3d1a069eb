//=========================================================================
// Scene System
//=========================================================================
//
// Named screens driven by a finite state machine.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     ├─ allowed: HashSet<(S, S)>   (transition table)
//     └─ active: Option<S>
//
// Flow:
//   update() → active Scene::update()
//   process_transitions() → on_exit(old) → on_enter(new)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use crate::core::render::Surface;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Trait =========================================================

/// Screen behavior with lifecycle hooks, update and render.
///
/// Scenes are registered once in the [`SceneManager`] and keep their own
/// state between activations.
///
/// ```rust
/// # use coin_dash::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl SceneKey for Screen {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum MyAction { Jump }
/// # impl Action for MyAction {}
/// struct MainScreen;
///
/// impl Scene<Screen, MyAction> for MainScreen {
///     fn update(&mut self, ctx: &mut GlobalContext<Screen, MyAction>) -> bool {
///         ctx.update_world()
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action>: Send {
    /// Called when the scene becomes the active screen.
    fn on_enter(&mut self, _ctx: &mut GlobalContext<S, A>) {}

    /// Called when the scene stops being the active screen.
    fn on_exit(&mut self, _ctx: &mut GlobalContext<S, A>) {}

    /// Called once per frame while active. Returns `true` if anything
    /// visible changed.
    fn update(&mut self, ctx: &mut GlobalContext<S, A>) -> bool;

    /// Draws the scene. The default draws the world.
    fn render(&self, ctx: &GlobalContext<S, A>, surface: &mut dyn Surface) {
        ctx.world.draw(surface, &ctx.viewport);
    }
}
