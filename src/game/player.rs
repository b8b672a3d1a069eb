//=========================================================================
// Player
//=========================================================================
//
// The controllable character. Each frame:
//   restart / off-screen → reload request (stop here)
//   left / right / none  → horizontal velocity
//   jump                 → vertical velocity
//   Body::update         → collision check request
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{GameAction, GameFrame, Screen, PLAYER_KIND};
use crate::core::assets::SpawnDef;
use crate::core::physics::{Body, Rect, Vec2};
use crate::core::render::{Color, Surface};
use crate::core::scene::SceneTransition;
use crate::core::world::{Axis, Entity, EntityId, Viewport};

//=== Constants ===========================================================

/// Horizontal acceleration and speed limit.
const RUN_SPEED: f32 = 3.0;

/// Jump impulse and vertical speed limit.
const JUMP_SPEED: f32 = 15.0;

//=== Facing ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

//=== Player ==============================================================

pub struct Player {
    body: Body,
    facing: Facing,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let mut body = Body::new(pos, size);
        body.set_velocity(RUN_SPEED, JUMP_SPEED);
        Self {
            body,
            facing: Facing::default(),
        }
    }

    pub fn from_spawn(spawn: &SpawnDef) -> Self {
        Self::new(Vec2::new(spawn.x, spawn.y), Vec2::new(spawn.w, spawn.h))
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    //--- Internal Helpers -------------------------------------------------

    fn steer(&mut self, ctx: &GameFrame<'_>) {
        if ctx.actions.is_active(GameAction::Left) {
            self.facing = Facing::Left;
            self.body.vel.x -= self.body.accel.x * ctx.dt;
        } else if ctx.actions.is_active(GameAction::Right) {
            self.facing = Facing::Right;
            self.body.vel.x += self.body.accel.x * ctx.dt;
        } else {
            self.body.vel.x = 0.0;
        }

        if ctx.actions.is_active(GameAction::Jump) && !self.body.jumping && !self.body.falling {
            self.body.vel.y = -self.body.max_vel.y * ctx.dt;
            self.body.jumping = true;
        }
    }
}

impl Entity<Screen, GameAction> for Player {
    fn kind(&self) -> &'static str {
        PLAYER_KIND
    }

    fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    fn on_added(&mut self, id: EntityId, viewport: &mut Viewport) {
        viewport.follow(id, Axis::Both);
    }

    fn update(&mut self, ctx: &mut GameFrame<'_>) -> bool {
        let restart = ctx.actions.is_active(GameAction::Restart);
        if restart || !ctx.viewport.is_visible(&self.body.bounds()) {
            debug!("Player reload (restart: {})", restart);
            ctx.transitions.push(SceneTransition::Change(Screen::Play));
            return false;
        }

        self.steer(ctx);
        self.body.update(ctx.dt, ctx.level);
        ctx.commands.check_collisions(ctx.id());

        !self.body.vel.is_zero()
    }

    fn draw(&self, surface: &mut dyn Surface, offset: Vec2) {
        let rect = self.body.bounds().translated(offset);
        surface.fill_rect(rect, Color::PLAYER);

        // Eye on the facing side
        let eye = (rect.w * 0.2).max(1.0);
        let eye_x = match self.facing {
            Facing::Left => rect.x + eye,
            Facing::Right => rect.right() - eye * 2.0,
        };
        surface.fill_rect(Rect::new(eye_x, rect.y + eye, eye, eye), Color::WHITE);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
