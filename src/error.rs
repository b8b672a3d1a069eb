//=========================================================================
// Errors
//=========================================================================
//
// Typed errors of the game. Only `GameError::DisplayInit` is fatal at
// startup; configuration and asset errors are logged and the game
// continues with defaults or without the failed resource.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== GameError ===========================================================

/// Top-level error returned by [`crate::Engine::run`].
#[derive(Debug, Error)]
pub enum GameError {
    /// The window or its pixel surface could not be created.
    #[error("display initialization failed: {0}")]
    DisplayInit(String),

    /// The platform event loop could not start or aborted.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

//=== ConfigError =========================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

//=== AssetError ==========================================================

/// Resource loading errors.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("no file for audio clip '{name}' in formats {formats:?}")]
    MissingAudio { name: String, formats: Vec<String> },

    #[error("invalid font: {0}")]
    InvalidFont(String),

    #[error("preloader stopped before completion")]
    LoaderDisconnected,
}
