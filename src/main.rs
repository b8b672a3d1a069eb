//=========================================================================
// Coin Dash
//=========================================================================
//
// Usage: coin_dash [CONFIG]
//
// CONFIG defaults to `coin_dash.toml` in the working directory. A missing
// or broken config, or a missing manifest, only costs defaults; failing
// to open the window is the one fatal error.
//
//=========================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};

use coin_dash::config::{GameConfig, DEFAULT_CONFIG_PATH};
use coin_dash::core::assets::{Preloader, ResourceManifest};
use coin_dash::error::GameError;
use coin_dash::game;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = GameConfig::load(&config_path).unwrap_or_else(|e| {
        warn!("{}; using default configuration", e);
        GameConfig::default()
    });

    let formats = config.audio.formats.clone();
    let preloader = Preloader::from_manifest_file(&config.assets.root, &config.assets.manifest, formats.clone())
        .unwrap_or_else(|e| {
            error!("{}; starting without resources", e);
            Preloader::spawn(&config.assets.root, ResourceManifest::default(), formats)
        });

    info!("Starting {}", config.display.title);

    match game::run(config, preloader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::DisplayInit(reason)) => {
            eprintln!("Coin Dash cannot open its window: {}", reason);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
