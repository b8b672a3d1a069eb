//=========================================================================
// Assets
//=========================================================================
//
// Resource manifest, level data, the asset store and the background
// preloader that fills it.
//
//=========================================================================

//=== Module Declarations =================================================

mod level;
mod loader;
mod manifest;
mod store;

//=== Public API ==========================================================

pub use level::{LevelDef, SpawnDef};
pub use loader::{load_entry, LoadEvent, LoadStatus, Preloader};
pub use manifest::{ResourceEntry, ResourceKind, ResourceManifest};
pub use store::{AssetStore, AudioClip, LoadedAsset};
