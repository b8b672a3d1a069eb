//=========================================================================
// Coin
//=========================================================================
//
// Static collectible. Touching the player scores one point and removes
// the coin; `collidable` guards against a second contact being reported
// before the removal is applied.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{GameAction, GameFrame, Screen, COIN_KIND, PLAYER_KIND};
use crate::core::assets::SpawnDef;
use crate::core::physics::{Rect, Vec2};
use crate::core::render::{Color, Surface};
use crate::core::world::{Contact, Entity};

//=== Coin ================================================================

pub struct Coin {
    bounds: Rect,
    collidable: bool,
}

impl Coin {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            collidable: true,
        }
    }

    pub fn from_spawn(spawn: &SpawnDef) -> Self {
        Self::new(spawn.bounds())
    }

    /// `true` once the coin has been picked up.
    pub fn is_collected(&self) -> bool {
        !self.collidable
    }
}

impl Entity<Screen, GameAction> for Coin {
    fn kind(&self) -> &'static str {
        COIN_KIND
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_collidable(&self) -> bool {
        self.collidable
    }

    fn on_collision(&mut self, contact: &Contact, ctx: &mut GameFrame<'_>) {
        if !self.collidable || contact.other_kind != PLAYER_KIND {
            return;
        }

        ctx.state.score += 1;
        self.collidable = false;
        ctx.commands.remove(ctx.id());
        debug!("Coin collected, score {}", ctx.state.score);
    }

    fn draw(&self, surface: &mut dyn Surface, offset: Vec2) {
        let rect = self.bounds.translated(offset);
        surface.fill_rect(rect, Color::GOLD);

        // Shine
        let inset = rect.w * 0.25;
        surface.fill_rect(Rect::new(rect.x + inset, rect.y + inset, inset, inset), Color::WHITE);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
