//=========================================================================
// Entity Factory
//=========================================================================
//
// String-keyed constructors used to instantiate level spawn points.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Entity;
use crate::core::assets::{AssetStore, SpawnDef};
use crate::core::input::Action;
use crate::core::scene::SceneKey;

//=== EntityFactory =======================================================

type Constructor<S, A> = Box<dyn Fn(&SpawnDef, &AssetStore) -> Box<dyn Entity<S, A>> + Send>;

/// Registry of entity constructors keyed by spawn kind.
pub struct EntityFactory<S: SceneKey, A: Action> {
    constructors: HashMap<String, Constructor<S, A>>,
}

impl<S: SceneKey, A: Action> EntityFactory<S, A> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers `constructor` under `key`, replacing any previous one.
    pub fn register<F>(&mut self, key: impl Into<String>, constructor: F)
    where
        F: Fn(&SpawnDef, &AssetStore) -> Box<dyn Entity<S, A>> + Send + 'static,
    {
        let key = key.into();
        debug!("Registering entity factory '{}'", key);
        if self.constructors.insert(key.clone(), Box::new(constructor)).is_some() {
            warn!("Entity factory '{}' was already registered and has been replaced", key);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Builds the entity for `spawn`, or `None` if its kind is unknown.
    pub fn create(&self, spawn: &SpawnDef, assets: &AssetStore) -> Option<Box<dyn Entity<S, A>>> {
        self.constructors
            .get(&spawn.kind)
            .map(|constructor| constructor(spawn, assets))
    }
}

impl<S: SceneKey, A: Action> Default for EntityFactory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
