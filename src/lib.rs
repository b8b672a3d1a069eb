//=========================================================================
// Coin Dash: Library Root
//
// A small platformer: run, jump, collect coins, watch the score tick up
// in binary in the corner of the screen.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the platform-free engine core for games and tests
// - Ship the game itself (`game`) on top of that core
// - Keep the window/OS integration (`platform`) private
//
// Typical usage:
// ```no_run
// use coin_dash::config::GameConfig;
// use coin_dash::core::assets::Preloader;
// use coin_dash::game;
//
// let config = GameConfig::default();
// let preloader = Preloader::from_manifest_file(
//     &config.assets.root,
//     &config.assets.manifest,
//     config.audio.formats.clone(),
// )?;
// game::run(config, preloader)?;
// # Ok::<(), coin_dash::error::GameError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine systems (input, scenes, world, physics,
// rendering, assets). `game` contains the screens and entities of
// Coin Dash.
//
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// pixel surface) and is not part of the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, OnLoaded};
