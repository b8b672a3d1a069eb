//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, the transition table, and lifecycle.
//
// Exactly one scene is active at a time. Scenes are stored in a HashMap
// by key so that they keep their state between activations; a change is
// only applied if the pair (active, target) is in the transition table.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use crate::core::render::Surface;

//=== Scene Transition ====================================================

/// Requested change of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Makes `K` the active screen. Changing to the active screen
    /// reloads it (exit then enter).
    Change(K),

    /// Exits the active screen, leaving none active.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Typically implemented by a game-specific enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Finite state machine over registered scenes.
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<S, A>>>,
    allowed: HashSet<(S, S)>,
    active: Option<S>,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no scenes and an empty transition table.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            allowed: HashSet::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene. The scene is boxed for storage.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Adds `from → to` to the transition table.
    pub fn allow(&mut self, from: S, to: S) {
        self.allowed.insert((from, to));
    }

    //--- Queries ----------------------------------------------------------

    /// Currently active scene.
    pub fn active(&self) -> Option<S> {
        self.active
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Returns `true` if the table permits `from → to`.
    pub fn is_allowed(&self, from: S, to: S) -> bool {
        self.allowed.contains(&(from, to))
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the active scene. Returns its dirty flag.
    pub fn update(&mut self, ctx: &mut GlobalContext<S, A>) -> bool {
        let Some(key) = self.active else {
            return false;
        };
        match self.scenes.get_mut(&key) {
            Some(scene) => scene.update(ctx),
            None => false,
        }
    }

    /// Renders the active scene.
    pub fn render(&self, ctx: &GlobalContext<S, A>, surface: &mut dyn Surface) {
        if let Some(scene) = self.active.and_then(|key| self.scenes.get(&key)) {
            scene.render(ctx, surface);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies all queued transitions in FIFO order.
    ///
    /// Returns `true` if the active scene changed or was reloaded.
    /// Transitions queued by `on_enter`/`on_exit` are kept for the next
    /// frame.
    pub fn process_transitions(&mut self, ctx: &mut GlobalContext<S, A>) -> bool {
        let mut changed = false;

        for transition in ctx.scene_transitions.take() {
            match transition {
                SceneTransition::Change(key) => changed |= self.change_internal(key, ctx),
                SceneTransition::Clear => changed |= self.clear_internal(ctx),
                SceneTransition::Empty => {}
            }
        }

        changed
    }

    //--- Internal Helpers -------------------------------------------------

    fn change_internal(&mut self, key: S, ctx: &mut GlobalContext<S, A>) -> bool {
        if !self.scenes.contains_key(&key) {
            warn!("Attempted to change to unregistered scene {:?}", key);
            return false;
        }

        if let Some(current) = self.active {
            if !self.is_allowed(current, key) {
                warn!("Transition {:?} → {:?} is not allowed, skipping", current, key);
                return false;
            }

            debug!("Exiting scene {:?}", current);
            if let Some(scene) = self.scenes.get_mut(&current) {
                scene.on_exit(ctx);
            }
        }

        info!("Entering scene {:?}", key);
        self.active = Some(key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(ctx);
        }

        true
    }

    fn clear_internal(&mut self, ctx: &mut GlobalContext<S, A>) -> bool {
        let Some(current) = self.active.take() else {
            return false;
        };

        debug!("Clearing active scene {:?}", current);
        if let Some(scene) = self.scenes.get_mut(&current) {
            scene.on_exit(ctx);
        }
        true
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::physics::Vec2;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Menu,
        Play,
        Credits,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    type Log = Arc<Mutex<Vec<String>>>;
    type Ctx = GlobalContext<TestScene, TestAction>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Scene<TestScene, TestAction> for Recorder {
        fn on_enter(&mut self, _ctx: &mut Ctx) {
            self.log.lock().unwrap().push(format!("enter {}", self.name));
        }

        fn on_exit(&mut self, _ctx: &mut Ctx) {
            self.log.lock().unwrap().push(format!("exit {}", self.name));
        }

        fn update(&mut self, _ctx: &mut Ctx) -> bool {
            self.log.lock().unwrap().push(format!("update {}", self.name));
            true
        }
    }

    fn setup() -> (SceneManager<TestScene, TestAction>, Ctx, Log) {
        let log: Log = Arc::default();
        let mut manager = SceneManager::new();
        manager.register_scene(TestScene::Menu, Recorder { name: "menu", log: log.clone() });
        manager.register_scene(TestScene::Play, Recorder { name: "play", log: log.clone() });
        manager.allow(TestScene::Menu, TestScene::Play);
        manager.allow(TestScene::Play, TestScene::Play);
        (manager, GlobalContext::new(Vec2::new(640.0, 480.0)), log)
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- SceneManager Tests -----------------------------------------------

    #[test]
    fn first_change_is_always_allowed() {
        let (mut manager, mut ctx, log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Play));

        assert!(manager.process_transitions(&mut ctx));
        assert_eq!(manager.active(), Some(TestScene::Play));
        assert_eq!(entries(&log), vec!["enter play"]);
    }

    #[test]
    fn allowed_change_exits_then_enters() {
        let (mut manager, mut ctx, log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Menu));
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Play));

        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), Some(TestScene::Play));
        assert_eq!(entries(&log), vec!["enter menu", "exit menu", "enter play"]);
    }

    #[test]
    fn change_to_active_scene_reloads_it() {
        let (mut manager, mut ctx, log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Play));
        manager.process_transitions(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Play));
        assert!(manager.process_transitions(&mut ctx));
        assert_eq!(entries(&log), vec!["enter play", "exit play", "enter play"]);
    }

    #[test]
    fn disallowed_change_is_ignored() {
        let (mut manager, mut ctx, log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Play));
        manager.process_transitions(&mut ctx);

        // Play → Menu is not in this table
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Menu));
        assert!(!manager.process_transitions(&mut ctx));
        assert_eq!(manager.active(), Some(TestScene::Play));
        assert_eq!(entries(&log), vec!["enter play"]);
    }

    #[test]
    fn unregistered_target_is_ignored() {
        let (mut manager, mut ctx, _log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Credits));

        assert!(!manager.process_transitions(&mut ctx));
        assert_eq!(manager.active(), None);
    }

    #[test]
    fn clear_exits_active_scene() {
        let (mut manager, mut ctx, log) = setup();
        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Menu));
        ctx.scene_transitions.push(SceneTransition::Clear);

        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active(), None);
        assert_eq!(entries(&log), vec!["enter menu", "exit menu"]);
    }

    #[test]
    fn update_only_reaches_active_scene() {
        let (mut manager, mut ctx, log) = setup();
        assert!(!manager.update(&mut ctx));

        ctx.scene_transitions.push(SceneTransition::Change(TestScene::Menu));
        manager.process_transitions(&mut ctx);
        assert!(manager.update(&mut ctx));

        assert_eq!(entries(&log), vec!["enter menu", "update menu"]);
    }
}
