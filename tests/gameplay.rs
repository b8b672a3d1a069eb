//=========================================================================
// Gameplay Scenarios
//=========================================================================
//
// Drives the real game (screens, factories, bindings) through the engine
// facade, without a window.
//
//=========================================================================

use coin_dash::config::GameConfig;
use coin_dash::core::assets::{LevelDef, LoadedAsset, SpawnDef};
use coin_dash::core::globals::GameState;
use coin_dash::core::input::{ActionState, InputEvent, KeyCode};
use coin_dash::core::physics::{LevelGeometry, Rect, Vec2};
use coin_dash::core::scene::{Scene, TransitionQueue};
use coin_dash::core::world::{Contact, Entity, EntityId, FrameContext, Viewport, WorldCommands};
use coin_dash::game::{
    self, Coin, GameAction, GameContext, HudContainer, PlayScreen, Player, Screen, COIN_KIND, HUD_KIND, PLAYER_KIND,
};
use coin_dash::Engine;

//=== Helpers =============================================================

const LEVEL: &str = "scenario";

/// Flat level with the player standing on the ground, three coins
/// overlapping its spawn and one coin far away.
fn coin_level() -> LevelDef {
    LevelDef {
        name: LEVEL.to_string(),
        width: 1280.0,
        height: 480.0,
        solids: vec![Rect::new(0.0, 448.0, 1280.0, 32.0)],
        spawns: vec![
            SpawnDef::new(PLAYER_KIND, 100.0, 416.0, 32.0, 32.0),
            SpawnDef::new(COIN_KIND, 102.0, 420.0, 16.0, 16.0),
            SpawnDef::new(COIN_KIND, 110.0, 424.0, 16.0, 16.0),
            SpawnDef::new(COIN_KIND, 114.0, 428.0, 16.0, 16.0),
            SpawnDef::new(COIN_KIND, 900.0, 420.0, 16.0, 16.0),
        ],
    }
}

fn engine_with(level: LevelDef) -> Engine<Screen, GameAction> {
    let config = GameConfig::default();
    let name = level.name.clone();
    game::build_engine(&config)
        .init(move |_, ctx| {
            ctx.assets.insert(name, LoadedAsset::Level(level));
        })
        .init(game::on_loaded(LEVEL.to_string()))
}

fn score(engine: &Engine<Screen, GameAction>) -> u32 {
    engine.context().state.score
}

fn hud(engine: &Engine<Screen, GameAction>) -> &HudContainer {
    let ctx = engine.context();
    let id = ctx.world.ids_of_kind(HUD_KIND)[0];
    ctx.world
        .get(id)
        .and_then(|e| e.as_any().downcast_ref::<HudContainer>())
        .expect("hud container")
}

//=== Scenarios ===========================================================

#[test]
fn collecting_three_coins_scores_three() {
    let mut engine = engine_with(coin_level());

    // Frame 1 enters the play screen, frame 2 runs the first collision pass
    engine.tick(1.0);
    assert_eq!(engine.systems().scene_manager.active(), Some(Screen::Play));
    assert_eq!(engine.context().world.count_kind(COIN_KIND), 4);

    engine.tick(1.0);
    assert_eq!(score(&engine), 3);
    assert_eq!(engine.context().world.count_kind(COIN_KIND), 1);

    // Nothing left to collect near the player
    engine.tick(1.0);
    assert_eq!(score(&engine), 3);
    assert_eq!(hud(&engine).children()[0].last_score(), 3);
}

#[test]
fn removed_coin_is_not_collected_again() {
    let mut engine = engine_with(coin_level());
    engine.tick(1.0);
    let coins = engine.context().world.ids_of_kind(COIN_KIND);
    assert_eq!(score(&engine), 0);

    engine.tick(1.0);
    assert_eq!(score(&engine), 3);

    let world = &mut engine.context_mut().world;
    let collected: Vec<EntityId> = coins.into_iter().filter(|id| !world.contains(*id)).collect();
    assert_eq!(collected.len(), 3);
    for id in &collected {
        assert!(!world.remove(*id), "coin already left the world");
    }

    // The player still stands where the coins were
    engine.tick(1.0);
    assert_eq!(score(&engine), 3);
    assert_eq!(engine.context().world.count_kind(COIN_KIND), 1);
}

#[test]
fn fourth_contact_on_a_collected_coin_does_not_count() {
    let mut keys = slotmap::SlotMap::<EntityId, ()>::with_key();
    let player_id = keys.insert(());
    let coin_ids: Vec<EntityId> = (0..3).map(|_| keys.insert(())).collect();

    let mut coins: Vec<Coin> = (0..3)
        .map(|i| Coin::new(Rect::new(i as f32 * 20.0, 0.0, 16.0, 16.0)))
        .collect();
    let mut state = GameState::default();
    let mut commands = WorldCommands::new();
    let mut transitions = TransitionQueue::new();
    let actions = ActionState::new();
    let viewport = Viewport::new(Vec2::new(640.0, 480.0));
    let level = LevelGeometry::default();
    let contact = Contact {
        other: player_id,
        other_kind: PLAYER_KIND,
    };

    let mut deliver = |coin: &mut Coin, id: EntityId, state: &mut GameState| {
        let mut ctx = FrameContext {
            id,
            dt: 1.0,
            actions: &actions,
            state,
            viewport: &viewport,
            level: &level,
            transitions: &mut transitions,
            commands: &mut commands,
        };
        coin.on_collision(&contact, &mut ctx);
    };

    assert_eq!(state.score, 0);
    for (coin, id) in coins.iter_mut().zip(&coin_ids) {
        deliver(coin, *id, &mut state);
    }
    assert_eq!(state.score, 3);

    deliver(&mut coins[0], coin_ids[0], &mut state);
    assert_eq!(state.score, 3);
    assert_eq!(commands.removals(), coin_ids.as_slice());
}

#[test]
fn restart_key_reloads_with_fresh_state() {
    let mut engine = engine_with(coin_level());
    engine.tick(1.0);
    engine.tick(1.0);
    assert_eq!(score(&engine), 3);

    engine.push_events([InputEvent::KeyDown(KeyCode::KeyR)]);
    engine.tick(1.0);

    let ctx = engine.context();
    assert_eq!(ctx.state.score, 0);
    assert_eq!(ctx.world.count_kind(HUD_KIND), 1);
    assert_eq!(ctx.world.count_kind(PLAYER_KIND), 1);
    assert_eq!(ctx.world.count_kind(COIN_KIND), 4);
    assert_eq!(hud(&engine).children().len(), 1);
    assert_eq!(engine.systems().scene_manager.active(), Some(Screen::Play));
}

#[test]
fn leaving_the_view_requests_exactly_one_reload() {
    // Player spawns below the level, on top of a coin
    let level = LevelDef {
        name: LEVEL.to_string(),
        width: 640.0,
        height: 480.0,
        solids: vec![],
        spawns: vec![
            SpawnDef::new(PLAYER_KIND, 100.0, 520.0, 32.0, 32.0),
            SpawnDef::new(COIN_KIND, 104.0, 524.0, 16.0, 16.0),
        ],
    };

    let mut ctx = GameContext::new(Vec2::new(640.0, 480.0));
    game::register_factories(&mut ctx.factory);
    ctx.assets.insert(LEVEL, LoadedAsset::Level(level));

    let mut play = PlayScreen::new(LEVEL);
    play.on_enter(&mut ctx);
    let player = ctx.world.ids_of_kind(PLAYER_KIND)[0];
    let start = ctx.world.get(player).map(|p| p.bounds());

    play.update(&mut ctx);

    assert_eq!(ctx.scene_transitions.len(), 1);
    assert_eq!(ctx.state.score, 0, "no collision pass after the reload request");
    assert_eq!(ctx.world.count_kind(COIN_KIND), 1);
    assert_eq!(ctx.world.get(player).map(|p| p.bounds()), start);

    let player = ctx
        .world
        .get(player)
        .and_then(|e| e.as_any().downcast_ref::<Player>())
        .expect("player");
    assert_eq!(player.body().vel, Vec2::ZERO);
}

#[test]
fn moving_right_scrolls_the_view() {
    let mut engine = engine_with(coin_level());
    engine.tick(1.0);
    engine.tick(1.0);

    engine.push_events([InputEvent::KeyDown(KeyCode::ArrowRight)]);
    for _ in 0..200 {
        engine.tick(1.0);
    }

    let ctx = engine.context();
    assert!(ctx.viewport.pos().x > 0.0);
    let player = ctx.world.ids_of_kind(PLAYER_KIND)[0];
    let bounds = ctx.world.get(player).map(|p| p.bounds()).expect("player");
    assert!(ctx.viewport.is_visible(&bounds));
}
