//=========================================================================
// Configuration
//=========================================================================
//
// Game settings read from a TOML file. Every field has a default, so a
// partial file (or none at all) is valid.
//
// ```toml
// [display]
// title = "Coin Dash"
// width = 640
// height = 480
// scale = 2
// fullscreen = false
// fps = 60
//
// [audio]
// formats = ["ogg", "mp3"]
//
// [physics]
// gravity = 0.98
//
// [assets]
// root = "assets"
// manifest = "manifest.ron"
//
// [game]
// start_level = "area01"
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::ConfigError;

//=== Constants ===========================================================

/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "coin_dash.toml";

//=== Sections ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,

    /// Logical resolution in pixels.
    pub width: u32,
    pub height: u32,

    /// Window size multiplier of the logical resolution.
    pub scale: u32,

    pub fullscreen: bool,

    /// Target frame rate; one frame at this rate is `dt = 1.0`.
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Coin Dash".to_string(),
            width: 640,
            height: 480,
            scale: 1,
            fullscreen: false,
            fps: 60,
        }
    }
}

impl DisplayConfig {
    /// Length of one game tick at the target rate.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Audio file extensions, in order of preference.
    pub formats: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            formats: vec!["ogg".to_string(), "mp3".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame tick.
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 0.98 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub root: PathBuf,

    /// Manifest path relative to `root`.
    pub manifest: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            manifest: PathBuf::from("manifest.ron"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSection {
    /// Level loaded when the play screen is entered.
    pub start_level: String,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            start_level: "area01".to_string(),
        }
    }
}

//=== GameConfig ==========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub audio: AudioConfig,
    pub physics: PhysicsConfig,
    pub assets: AssetsConfig,
    pub game: GameSection,
}

impl GameConfig {
    /// Parses and validates a TOML document; `origin` only labels errors.
    pub fn from_toml_str(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                info!("Loading config from {}", path.display());
                Self::from_toml_str(&source, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.width == 0 || display.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "display size must be positive, got {}x{}",
                display.width, display.height
            )));
        }
        if display.scale == 0 {
            return Err(ConfigError::Invalid("display.scale must be at least 1".to_string()));
        }
        if display.fps == 0 {
            return Err(ConfigError::Invalid("display.fps must be at least 1".to_string()));
        }
        if self.audio.formats.is_empty() {
            return Err(ConfigError::Invalid("audio.formats must not be empty".to_string()));
        }
        if self.game.start_level.is_empty() {
            return Err(ConfigError::Invalid("game.start_level must not be empty".to_string()));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
