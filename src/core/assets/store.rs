//=========================================================================
// Asset Store
//=========================================================================
//
// Loaded resources by name. Filled by the preloader, read by screens and
// entity constructors. Handles are `Arc`s so that entities can keep them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

//=== Internal Dependencies ===============================================

use super::LevelDef;
use crate::core::render::BitmapFont;

//=== AudioClip ===========================================================

/// Raw encoded audio data and the format it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub format: String,
    pub bytes: Arc<Vec<u8>>,
}

//=== LoadedAsset =========================================================

/// A single resource produced by the loader.
#[derive(Debug, Clone)]
pub enum LoadedAsset {
    Level(LevelDef),
    Font(BitmapFont),
    Audio(AudioClip),
}

//=== AssetStore ==========================================================

#[derive(Debug, Default)]
pub struct AssetStore {
    levels: HashMap<String, Arc<LevelDef>>,
    fonts: HashMap<String, Arc<BitmapFont>>,
    audio: HashMap<String, AudioClip>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `asset` under `name`, replacing a resource of the same kind.
    pub fn insert(&mut self, name: impl Into<String>, asset: LoadedAsset) {
        let name = name.into();
        let replaced = match asset {
            LoadedAsset::Level(level) => self.levels.insert(name.clone(), Arc::new(level)).is_some(),
            LoadedAsset::Font(font) => self.fonts.insert(name.clone(), Arc::new(font)).is_some(),
            LoadedAsset::Audio(clip) => self.audio.insert(name.clone(), clip).is_some(),
        };
        if replaced {
            warn!("Resource '{}' loaded twice, keeping the last one", name);
        }
    }

    pub fn level(&self, name: &str) -> Option<Arc<LevelDef>> {
        self.levels.get(name).cloned()
    }

    pub fn font(&self, name: &str) -> Option<Arc<BitmapFont>> {
        self.fonts.get(name).cloned()
    }

    pub fn audio(&self, name: &str) -> Option<&AudioClip> {
        self.audio.get(name)
    }

    /// Total number of stored resources.
    pub fn len(&self) -> usize {
        self.levels.len() + self.fonts.len() + self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_are_looked_up_by_kind_and_name() {
        let mut store = AssetStore::new();
        store.insert(
            "area01",
            LoadedAsset::Level(LevelDef {
                name: "area01".to_string(),
                width: 10.0,
                height: 10.0,
                solids: vec![],
                spawns: vec![],
            }),
        );
        store.insert("hud_font", LoadedAsset::Font(BitmapFont::builtin()));
        store.insert(
            "cling",
            LoadedAsset::Audio(AudioClip {
                format: "ogg".to_string(),
                bytes: Arc::new(vec![1, 2, 3]),
            }),
        );

        assert_eq!(store.len(), 3);
        assert_eq!(store.level("area01").map(|l| l.width), Some(10.0));
        assert!(store.level("hud_font").is_none());
        assert!(store.font("hud_font").is_some());
        assert_eq!(store.audio("cling").map(|c| c.format.as_str()), Some("ogg"));
    }
}
