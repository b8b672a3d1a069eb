//=========================================================================
// World Container
//=========================================================================
//
// Owns every live entity and the geometry of the loaded level.
//
// Update order:
//   1. Entity::update for every entity
//   2. collision pass for each requested check, both sides notified
//   3. queued removals
//   4. viewport follows its target (forgets it if the target is gone)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};
use slotmap::SlotMap;

//=== Internal Dependencies ===============================================

use super::{Contact, Entity, EntityFactory, EntityId, FrameContext, Viewport, WorldCommands};
use crate::core::assets::{AssetStore, LevelDef};
use crate::core::globals::GameState;
use crate::core::input::{Action, ActionState};
use crate::core::physics::{LevelGeometry, Vec2};
use crate::core::render::{Color, Surface};
use crate::core::scene::{SceneKey, TransitionQueue};

//=== Constants ===========================================================

const DEFAULT_GRAVITY: f32 = 0.98;

//=== World ===============================================================

pub struct World<S: SceneKey, A: Action> {
    entities: SlotMap<EntityId, Box<dyn Entity<S, A>>>,
    level: LevelGeometry,
    level_name: Option<String>,
    gravity: f32,
}

impl<S: SceneKey, A: Action> World<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty world with no level loaded.
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            level: LevelGeometry {
                gravity: DEFAULT_GRAVITY,
                ..LevelGeometry::default()
            },
            level_name: None,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Sets the gravity applied to every level loaded from now on, and
    /// to the current one.
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
        self.level.gravity = gravity;
    }

    //--- Entity Management ------------------------------------------------

    /// Adds an entity and calls its `on_added` hook.
    pub fn add(&mut self, entity: Box<dyn Entity<S, A>>, viewport: &mut Viewport) -> EntityId {
        let id = self.entities.insert(entity);
        if let Some(entity) = self.entities.get_mut(id) {
            trace!("Added {} entity {:?}", entity.kind(), id);
            entity.on_added(id, viewport);
        }
        self.follow_target(viewport);
        id
    }

    /// Removes an entity. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.entities.remove(id) {
            Some(entity) => {
                trace!("Removed {} entity {:?}", entity.kind(), id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Entity<S, A>> {
        self.entities.get(id).map(|entity| entity.as_ref())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of live entities of `kind`.
    pub fn count_kind(&self, kind: &str) -> usize {
        self.entities.values().filter(|e| e.kind() == kind).count()
    }

    /// Ids of the live entities of `kind`.
    pub fn ids_of_kind(&self, kind: &str) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    //--- Level ------------------------------------------------------------

    pub fn level(&self) -> &LevelGeometry {
        &self.level
    }

    pub fn level_name(&self) -> Option<&str> {
        self.level_name.as_deref()
    }

    /// Replaces the level: drops non-persistent entities, installs the
    /// new geometry and spawns every known spawn point.
    ///
    /// Returns the number of spawned entities.
    pub fn load_level(
        &mut self,
        def: &LevelDef,
        factory: &EntityFactory<S, A>,
        assets: &AssetStore,
        viewport: &mut Viewport,
    ) -> usize {
        let before = self.entities.len();
        self.entities.retain(|_, entity| entity.is_persistent());
        debug!("Cleared {} entities", before - self.entities.len());

        self.level = LevelGeometry {
            width: def.width,
            height: def.height,
            solids: def.solids.clone(),
            gravity: self.gravity,
        };
        self.level_name = Some(def.name.clone());
        viewport.set_bounds(self.level.bounds());
        viewport.move_to(Vec2::ZERO);

        let mut spawned = 0;
        for spawn in &def.spawns {
            match factory.create(spawn, assets) {
                Some(entity) => {
                    self.add(entity, viewport);
                    spawned += 1;
                }
                None => warn!("Level '{}': unknown entity kind '{}'", def.name, spawn.kind),
            }
        }

        self.follow_target(viewport);
        info!("Loaded level '{}' ({} entities)", def.name, spawned);
        spawned
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame. Returns `true` if anything visible changed.
    pub fn update(
        &mut self,
        dt: f32,
        actions: &ActionState<A>,
        state: &mut GameState,
        transitions: &mut TransitionQueue<S>,
        viewport: &mut Viewport,
    ) -> bool {
        let mut commands = WorldCommands::new();
        let mut dirty = false;

        //--- 1. Entity updates ---------------------------------------------
        let ids: Vec<EntityId> = self.entities.keys().collect();
        for &id in &ids {
            let Some(entity) = self.entities.get_mut(id) else {
                continue;
            };
            let mut ctx = FrameContext {
                id,
                dt,
                actions,
                state: &mut *state,
                viewport: &*viewport,
                level: &self.level,
                transitions: &mut *transitions,
                commands: &mut commands,
            };
            dirty |= entity.update(&mut ctx);
        }

        //--- 2. Collision pass ---------------------------------------------
        for id in commands.take_collision_checks() {
            for (other, contact_for_other, contact_for_self) in self.overlaps_of(id) {
                let mut ctx = FrameContext {
                    id: other,
                    dt,
                    actions,
                    state: &mut *state,
                    viewport: &*viewport,
                    level: &self.level,
                    transitions: &mut *transitions,
                    commands: &mut commands,
                };
                if let Some(entity) = self.entities.get_mut(other) {
                    entity.on_collision(&contact_for_other, &mut ctx);
                }

                ctx.id = id;
                if let Some(entity) = self.entities.get_mut(id) {
                    entity.on_collision(&contact_for_self, &mut ctx);
                }
                dirty = true;
            }
        }

        //--- 3. Removals ---------------------------------------------------
        for id in commands.take_removals() {
            dirty |= self.remove(id);
        }

        //--- 4. Viewport -----------------------------------------------------
        dirty |= self.follow_target(viewport);

        dirty
    }

    //--- Rendering --------------------------------------------------------

    /// Draws the level and all entities in ascending z-order.
    pub fn draw(&self, surface: &mut dyn Surface, viewport: &Viewport) {
        surface.clear(Color::SKY);

        let camera = Vec2::ZERO - viewport.pos();
        for solid in &self.level.solids {
            surface.fill_rect(solid.translated(camera), Color::GROUND);
        }

        let mut order: Vec<&Box<dyn Entity<S, A>>> = self.entities.values().collect();
        order.sort_by_key(|entity| entity.z_order());

        for entity in order {
            let offset = if entity.is_floating() { Vec2::ZERO } else { camera };
            entity.draw(surface, offset);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Collidable entities overlapping `id`, with the contact each side
    /// receives.
    fn overlaps_of(&self, id: EntityId) -> Vec<(EntityId, Contact, Contact)> {
        let Some(subject) = self.entities.get(id) else {
            return Vec::new();
        };
        if !subject.is_collidable() {
            return Vec::new();
        }

        let bounds = subject.bounds();
        let for_other = Contact {
            other: id,
            other_kind: subject.kind(),
        };

        self.entities
            .iter()
            .filter(|(other, entity)| {
                *other != id && entity.is_collidable() && entity.bounds().overlaps(&bounds)
            })
            .map(|(other, entity)| {
                let for_self = Contact {
                    other,
                    other_kind: entity.kind(),
                };
                (other, for_other, for_self)
            })
            .collect()
    }

    /// Re-centers the viewport on its target. Returns `true` if it moved.
    fn follow_target(&self, viewport: &mut Viewport) -> bool {
        let Some(target) = viewport.target() else {
            return false;
        };
        match self.entities.get(target) {
            Some(entity) => viewport.focus_on(&entity.bounds()),
            None => {
                viewport.unfollow(target);
                false
            }
        }
    }
}

impl<S: SceneKey, A: Action> Default for World<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
