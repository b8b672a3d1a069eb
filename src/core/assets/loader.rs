//=========================================================================
// Preloader
//=========================================================================
//
// Loads every manifest entry on a worker thread and reports back over a
// channel. The frame loop polls the receiving end and moves finished
// resources into the AssetStore.
//
// Architecture:
// ```text
//   worker thread ──LoadEvent──> crossbeam channel ──poll()──> AssetStore
// ```
//
// A resource that fails to load is logged and skipped; loading continues
// with the next entry.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{AssetStore, AudioClip, LevelDef, LoadedAsset, ResourceEntry, ResourceKind, ResourceManifest};
use crate::core::render::BitmapFont;
use crate::error::AssetError;

//=== LoadEvent ===========================================================

/// Message sent by the worker thread.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded { name: String, asset: LoadedAsset },
    Failed { name: String, error: AssetError },
    Finished,
}

//=== LoadStatus ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading { loaded: usize, total: usize },
    Complete,
}

impl LoadStatus {
    /// Fraction of processed resources in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        match *self {
            LoadStatus::Loading { total: 0, .. } | LoadStatus::Complete => 1.0,
            LoadStatus::Loading { loaded, total } => loaded as f32 / total as f32,
        }
    }
}

//=== Preloader ===========================================================

pub struct Preloader {
    receiver: Receiver<LoadEvent>,
    total: usize,
    processed: usize,
    failed: usize,
    finished: bool,
}

impl Preloader {
    /// Starts loading `manifest` relative to `root`.
    ///
    /// `audio_formats` lists the file extensions tried for audio entries,
    /// in order of preference.
    pub fn spawn(root: impl Into<PathBuf>, manifest: ResourceManifest, audio_formats: Vec<String>) -> Self {
        let root = root.into();
        let total = manifest.len();
        let (sender, receiver) = unbounded();

        info!("Preloading {} resources from {}", total, root.display());

        thread::spawn(move || {
            for entry in &manifest.resources {
                let event = match load_entry(&root, entry, &audio_formats) {
                    Ok(asset) => LoadEvent::Loaded {
                        name: entry.name.clone(),
                        asset,
                    },
                    Err(error) => LoadEvent::Failed {
                        name: entry.name.clone(),
                        error,
                    },
                };
                if sender.send(event).is_err() {
                    debug!("Preloader receiver dropped, stopping");
                    return;
                }
            }
            let _ = sender.send(LoadEvent::Finished);
        });

        Self {
            receiver,
            total,
            processed: 0,
            failed: 0,
            finished: false,
        }
    }

    /// Reads the manifest at `root/manifest` and starts loading it.
    pub fn from_manifest_file(
        root: impl Into<PathBuf>,
        manifest: &Path,
        audio_formats: Vec<String>,
    ) -> Result<Self, AssetError> {
        let root = root.into();
        let manifest = ResourceManifest::load(&root.join(manifest))?;
        Ok(Self::spawn(root, manifest, audio_formats))
    }

    //--- Polling ----------------------------------------------------------

    /// Moves every resource received so far into `store`.
    pub fn poll(&mut self, store: &mut AssetStore) -> Result<LoadStatus, AssetError> {
        while !self.finished {
            match self.receiver.try_recv() {
                Ok(event) => self.handle(event, store),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(AssetError::LoaderDisconnected),
            }
        }
        Ok(self.status())
    }

    /// Blocks until every resource has been processed.
    pub fn wait(&mut self, store: &mut AssetStore) -> Result<(), AssetError> {
        while !self.finished {
            let event = self
                .receiver
                .recv()
                .map_err(|_| AssetError::LoaderDisconnected)?;
            self.handle(event, store);
        }
        Ok(())
    }

    pub fn status(&self) -> LoadStatus {
        if self.finished {
            LoadStatus::Complete
        } else {
            LoadStatus::Loading {
                loaded: self.processed,
                total: self.total,
            }
        }
    }

    /// Number of resources in the manifest.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of resources that failed to load.
    pub fn failed(&self) -> usize {
        self.failed
    }

    //--- Internal Helpers -------------------------------------------------

    fn handle(&mut self, event: LoadEvent, store: &mut AssetStore) {
        match event {
            LoadEvent::Loaded { name, asset } => {
                debug!("Loaded resource '{}'", name);
                store.insert(name, asset);
                self.processed += 1;
            }
            LoadEvent::Failed { name, error } => {
                warn!("Skipping resource '{}': {}", name, error);
                self.failed += 1;
                self.processed += 1;
            }
            LoadEvent::Finished => {
                info!(
                    "Preloading complete ({} loaded, {} failed)",
                    self.processed - self.failed,
                    self.failed
                );
                self.finished = true;
            }
        }
    }
}

//=== Loading Functions ===================================================

/// Loads one manifest entry.
pub fn load_entry(root: &Path, entry: &ResourceEntry, audio_formats: &[String]) -> Result<LoadedAsset, AssetError> {
    match entry.kind {
        ResourceKind::Level => LevelDef::load(&root.join(&entry.path)).map(LoadedAsset::Level),
        ResourceKind::Font => load_font(&root.join(&entry.path)).map(LoadedAsset::Font),
        ResourceKind::Audio => load_audio(root, entry, audio_formats).map(LoadedAsset::Audio),
    }
}

fn load_font(path: &Path) -> Result<BitmapFont, AssetError> {
    let source = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    BitmapFont::from_ron_str(&source).map_err(|e| match e {
        AssetError::Parse { message, .. } => AssetError::Parse {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Picks the first `path.<format>` that exists.
fn load_audio(root: &Path, entry: &ResourceEntry, formats: &[String]) -> Result<AudioClip, AssetError> {
    let base = root.join(&entry.path);

    for format in formats {
        let candidate = base.with_extension(format);
        if !candidate.is_file() {
            continue;
        }
        let bytes = std::fs::read(&candidate).map_err(|source| AssetError::Io {
            path: candidate.clone(),
            source,
        })?;
        return Ok(AudioClip {
            format: format.clone(),
            bytes: Arc::new(bytes),
        });
    }

    Err(AssetError::MissingAudio {
        name: entry.name.clone(),
        formats: formats.to_vec(),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const LEVEL: &str = r#"(name: "area01", width: 640.0, height: 480.0)"#;

    fn entry(name: &str, kind: ResourceKind, path: &str) -> ResourceEntry {
        ResourceEntry {
            name: name.to_string(),
            kind,
            path: path.to_string(),
        }
    }

    fn formats() -> Vec<String> {
        vec!["ogg".to_string(), "mp3".to_string()]
    }

    fn asset_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("levels")).unwrap();
        fs::create_dir_all(dir.path().join("audio")).unwrap();
        fs::write(dir.path().join("levels/area01.ron"), LEVEL).unwrap();
        fs::write(dir.path().join("audio/cling.mp3"), [7u8, 7, 7]).unwrap();
        dir
    }

    #[test]
    fn audio_uses_first_available_format() {
        let dir = asset_dir();
        fs::write(dir.path().join("audio/cling.ogg"), [1u8]).unwrap();

        let asset = load_entry(dir.path(), &entry("cling", ResourceKind::Audio, "audio/cling"), &formats()).unwrap();
        let LoadedAsset::Audio(clip) = asset else {
            panic!("expected audio");
        };
        assert_eq!(clip.format, "ogg");
        assert_eq!(*clip.bytes, vec![1u8]);
    }

    #[test]
    fn audio_falls_back_to_next_format() {
        let dir = asset_dir();
        let asset = load_entry(dir.path(), &entry("cling", ResourceKind::Audio, "audio/cling"), &formats()).unwrap();
        let LoadedAsset::Audio(clip) = asset else {
            panic!("expected audio");
        };
        assert_eq!(clip.format, "mp3");
    }

    #[test]
    fn audio_without_any_format_fails() {
        let dir = asset_dir();
        let err = load_entry(dir.path(), &entry("boom", ResourceKind::Audio, "audio/boom"), &formats()).unwrap_err();
        assert!(matches!(err, AssetError::MissingAudio { .. }));
    }

    #[test]
    fn preloader_fills_store_and_skips_failures() {
        let dir = asset_dir();
        let manifest = ResourceManifest {
            resources: vec![
                entry("area01", ResourceKind::Level, "levels/area01.ron"),
                entry("cling", ResourceKind::Audio, "audio/cling"),
                entry("missing", ResourceKind::Level, "levels/missing.ron"),
            ],
        };

        let mut preloader = Preloader::spawn(dir.path(), manifest, formats());
        let mut store = AssetStore::new();
        preloader.wait(&mut store).unwrap();

        assert_eq!(preloader.status(), LoadStatus::Complete);
        assert_eq!(preloader.failed(), 1);
        assert!(store.level("area01").is_some());
        assert!(store.audio("cling").is_some());
        assert!(store.level("missing").is_none());
        assert_eq!(preloader.poll(&mut store).unwrap(), LoadStatus::Complete);
    }

    #[test]
    fn empty_manifest_completes() {
        let dir = tempfile::tempdir().unwrap();
        let mut preloader = Preloader::spawn(dir.path(), ResourceManifest::default(), formats());
        let mut store = AssetStore::new();
        preloader.wait(&mut store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn manifest_file_is_read_from_root() {
        let dir = asset_dir();
        fs::write(
            dir.path().join("manifest.ron"),
            r#"(resources: [(name: "area01", kind: Level, path: "levels/area01.ron")])"#,
        )
        .unwrap();

        let mut preloader =
            Preloader::from_manifest_file(dir.path(), Path::new("manifest.ron"), formats()).unwrap();
        let mut store = AssetStore::new();
        preloader.wait(&mut store).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn progress_fraction() {
        assert_eq!(LoadStatus::Loading { loaded: 1, total: 4 }.progress(), 0.25);
        assert_eq!(LoadStatus::Loading { loaded: 0, total: 0 }.progress(), 1.0);
        assert_eq!(LoadStatus::Complete.progress(), 1.0);
    }
}
