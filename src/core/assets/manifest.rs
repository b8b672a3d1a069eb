//=========================================================================
// Resource Manifest
//=========================================================================
//
// List of resources to preload, relative to the asset root.
//
// ```text
// (
//     resources: [
//         (name: "area01", kind: Level, path: "levels/area01.ron"),
//         (name: "hud_font", kind: Font, path: "fonts/hud_font.ron"),
//         (name: "cling", kind: Audio, path: "audio/cling"),
//     ],
// )
// ```
//
// Audio paths carry no extension; the loader tries each configured
// format in order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::AssetError;

//=== ResourceKind ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Level,
    Font,
    Audio,
}

//=== ResourceEntry =======================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub kind: ResourceKind,
    pub path: String,
}

//=== ResourceManifest ====================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceManifest {
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
}

impl ResourceManifest {
    pub fn from_ron_str(source: &str, origin: &Path) -> Result<Self, AssetError> {
        ron::from_str(source).map_err(|e| AssetError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let source = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source, path)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
