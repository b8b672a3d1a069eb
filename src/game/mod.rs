//=========================================================================
// Coin Dash
//=========================================================================
//
// The game built on the engine core: two screens, three entity types and
// the bootstrap that wires them together.
//
// Bootstrap:
//   config → EngineBuilder (view size, gravity) → Preloader
//   → on_loaded: screens + transition table, factories, key bindings
//   → Change(Play)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Module Declarations =================================================

pub mod coin;
pub mod hud;
pub mod player;
pub mod screens;

//=== Public API ==========================================================

pub use coin::Coin;
pub use hud::{format_score, HudContainer, ScoreItem};
pub use player::{Facing, Player};
pub use screens::{MenuScreen, PlayScreen};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::assets::{AssetStore, Preloader, SpawnDef};
use crate::core::input::{InputSystem, KeyCode, Trigger};
use crate::core::scene::{SceneManager, SceneTransition};
use crate::core::world::{Entity, EntityFactory, FrameContext};
use crate::core::{Action, GlobalContext, GlobalSystems, SceneKey};
use crate::engine::{Engine, EngineBuilder};
use crate::error::GameError;

//=== Constants ===========================================================

/// Factory key of the player.
pub const PLAYER_KIND: &str = "player";

/// Factory key of the coin.
pub const COIN_KIND: &str = "GoldCoin";

/// Kind tag of the HUD container.
pub const HUD_KIND: &str = "hud";

/// Font resource used by the score display.
pub const HUD_FONT: &str = "hud_font";

//=== Keys ================================================================

/// Screens of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Play,
}

impl SceneKey for Screen {}

/// Logical actions bound to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Left,
    Right,
    Jump,
    Restart,
}

impl Action for GameAction {}

pub type GameContext = GlobalContext<Screen, GameAction>;
pub type GameSystems = GlobalSystems<Screen, GameAction>;
pub type GameFrame<'a> = FrameContext<'a, Screen, GameAction>;
pub type GameEntity = dyn Entity<Screen, GameAction>;

//=== Bootstrap ===========================================================

/// Arrow keys move, X jumps, R restarts the level.
pub fn bind_keys(input: &mut InputSystem<GameAction>) {
    input.bind_key(KeyCode::ArrowLeft, GameAction::Left, Trigger::Held);
    input.bind_key(KeyCode::ArrowRight, GameAction::Right, Trigger::Held);
    input.bind_key(KeyCode::KeyX, GameAction::Jump, Trigger::Pressed);
    input.bind_key(KeyCode::KeyR, GameAction::Restart, Trigger::Pressed);
}

/// Registers the constructors used by level spawn points.
pub fn register_factories(factory: &mut EntityFactory<Screen, GameAction>) {
    factory.register(PLAYER_KIND, |spawn: &SpawnDef, _: &AssetStore| {
        Box::new(Player::from_spawn(spawn)) as Box<GameEntity>
    });
    factory.register(COIN_KIND, |spawn: &SpawnDef, _: &AssetStore| {
        Box::new(Coin::from_spawn(spawn)) as Box<GameEntity>
    });
}

/// Registers both screens and the transitions between them.
///
/// `Play → Play` is allowed so that the play screen can reload itself.
pub fn register_screens(manager: &mut SceneManager<Screen, GameAction>, start_level: &str) {
    manager.register_scene(Screen::Menu, MenuScreen::new());
    manager.register_scene(Screen::Play, PlayScreen::new(start_level));

    manager.allow(Screen::Menu, Screen::Play);
    manager.allow(Screen::Play, Screen::Play);
    manager.allow(Screen::Play, Screen::Menu);
}

/// Everything that happens once the resources are loaded.
pub fn on_loaded(start_level: String) -> impl FnOnce(&mut GameSystems, &mut GameContext) {
    move |systems: &mut GameSystems, ctx: &mut GameContext| {
        register_screens(&mut systems.scene_manager, &start_level);
        register_factories(&mut ctx.factory);
        bind_keys(&mut systems.input);

        info!("Game registered, starting on level '{}'", start_level);
        ctx.scene_transitions.push(SceneTransition::Change(Screen::Play));
    }
}

/// Builds the engine from the configuration.
pub fn build_engine(config: &GameConfig) -> Engine<Screen, GameAction> {
    EngineBuilder::new()
        .with_display(&config.display)
        .with_gravity(config.physics.gravity)
        .build()
}

/// Opens the window and runs the game until it is closed.
pub fn run(config: GameConfig, preloader: Preloader) -> Result<(), GameError> {
    let engine = build_engine(&config);
    let on_loaded = on_loaded(config.game.start_level.clone());
    engine.run(config.display, preloader, on_loaded)
}

//=========================================================================
// Unit Tests
//=========================================================================
