//=========================================================================
// Level Data
//=========================================================================
//
// RON level description: size, solid rectangles and entity spawn points.
//
// ```text
// (
//     name: "area01",
//     width: 1600.0,
//     height: 480.0,
//     solids: [(x: 0.0, y: 448.0, w: 1600.0, h: 32.0)],
//     spawns: [(kind: "player", x: 32.0, y: 384.0, w: 32.0, h: 32.0)],
// )
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::physics::Rect;
use crate::error::AssetError;

//=== SpawnDef ============================================================

/// Entity spawn point; `kind` selects the factory constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDef {
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl SpawnDef {
    pub fn new(kind: impl Into<String>, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind: kind.into(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

//=== LevelDef ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub solids: Vec<Rect>,
    #[serde(default)]
    pub spawns: Vec<SpawnDef>,
}

impl LevelDef {
    /// Parses a level; `origin` only labels errors.
    pub fn from_ron_str(source: &str, origin: &Path) -> Result<Self, AssetError> {
        let level: LevelDef = ron::from_str(source).map_err(|e| AssetError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        level.validate(origin)?;
        Ok(level)
    }

    /// Reads and parses a level file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let source = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source, path)
    }

    fn validate(&self, origin: &Path) -> Result<(), AssetError> {
        let invalid = |message: String| AssetError::Parse {
            path: origin.to_path_buf(),
            message,
        };

        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(invalid(format!(
                "level size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(spawn) = self.spawns.iter().find(|s| s.w <= 0.0 || s.h <= 0.0) {
            return Err(invalid(format!("spawn '{}' has an empty size", spawn.kind)));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
