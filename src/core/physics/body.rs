//=========================================================================
// Body
//=========================================================================
//
// Kinematic body integrated once per frame against static level
// geometry.
//
// Units: velocities are displacements per nominal frame. `dt` is the
// frame-tick ratio (1.0 when the game runs at its target rate) and only
// scales the forces applied this frame, not the displacement.
//
// Step order:
//   gravity → clamp to max_vel → move X → resolve X → move Y → resolve Y
//   → update jumping / falling
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::shape::{Rect, Vec2};

//=== LevelGeometry =======================================================

/// Static collision geometry of the loaded level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelGeometry {
    /// Level size in pixels.
    pub width: f32,
    pub height: f32,

    /// Solid rectangles (ground, platforms, walls).
    pub solids: Vec<Rect>,

    /// Gravity added to a body's vertical velocity per frame tick.
    pub gravity: f32,
}

impl LevelGeometry {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

//=== Body ================================================================

/// Physics body of a movable entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,

    /// Horizontal/vertical acceleration applied by the owner per tick.
    pub accel: Vec2,

    /// Absolute velocity limit per axis.
    pub max_vel: Vec2,

    /// Multiplier on the level gravity.
    pub gravity_scale: f32,

    /// Moving upward after a jump.
    pub jumping: bool,

    /// Moving downward without support.
    pub falling: bool,
}

impl Body {
    /// Creates a resting body with no acceleration.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            max_vel: Vec2::new(f32::MAX, f32::MAX),
            gravity_scale: 1.0,
            jumping: false,
            falling: false,
        }
    }

    /// Sets acceleration and max velocity to the same per-axis values.
    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.accel = Vec2::new(x, y);
        self.max_vel = Vec2::new(x, y);
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Integrates one frame. Returns `true` if the body moved.
    pub fn update(&mut self, dt: f32, level: &LevelGeometry) -> bool {
        let start = self.pos;

        self.vel.y += level.gravity * self.gravity_scale * dt;
        self.vel.x = self.vel.x.clamp(-self.max_vel.x, self.max_vel.x);
        self.vel.y = self.vel.y.clamp(-self.max_vel.y, self.max_vel.y);

        self.step_x(level);
        let landed = self.step_y(level);

        if landed {
            self.falling = false;
            self.jumping = false;
        } else {
            self.falling = self.vel.y > 0.0;
            if self.falling {
                self.jumping = false;
            }
        }

        self.pos != start
    }

    //--- Internal Helpers -------------------------------------------------

    fn step_x(&mut self, level: &LevelGeometry) {
        let dx = self.vel.x;
        if dx == 0.0 {
            return;
        }

        self.pos.x += dx;

        for solid in &level.solids {
            if !self.bounds().overlaps(solid) {
                continue;
            }
            if dx > 0.0 {
                self.pos.x = solid.left() - self.size.x;
            } else {
                self.pos.x = solid.right();
            }
            self.vel.x = 0.0;
        }

        // Level side edges behave like walls
        let max_x = (level.width - self.size.x).max(0.0);
        if self.pos.x < 0.0 || self.pos.x > max_x {
            self.pos.x = self.pos.x.clamp(0.0, max_x);
            self.vel.x = 0.0;
        }
    }

    /// Returns `true` if the body landed on a solid.
    fn step_y(&mut self, level: &LevelGeometry) -> bool {
        let dy = self.vel.y;
        if dy == 0.0 {
            return false;
        }

        self.pos.y += dy;
        let mut landed = false;

        for solid in &level.solids {
            if !self.bounds().overlaps(solid) {
                continue;
            }
            if dy > 0.0 {
                self.pos.y = solid.top() - self.size.y;
                landed = true;
            } else {
                self.pos.y = solid.bottom();
            }
            self.vel.y = 0.0;
        }

        landed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_level() -> LevelGeometry {
        LevelGeometry {
            width: 640.0,
            height: 480.0,
            solids: vec![Rect::new(0.0, 448.0, 640.0, 32.0)],
            gravity: 0.98,
        }
    }

    fn standing_body() -> Body {
        let mut body = Body::new(Vec2::new(100.0, 416.0), Vec2::new(32.0, 32.0));
        body.set_velocity(3.0, 15.0);
        body
    }

    #[test]
    fn gravity_pulls_body_down_in_open_air() {
        let level = LevelGeometry { solids: vec![], ..flat_level() };
        let mut body = standing_body();

        body.update(1.0, &level);

        assert_relative_eq!(body.vel.y, 0.98);
        assert_relative_eq!(body.pos.y, 416.98);
        assert!(body.falling);
        assert!(!body.jumping);
    }

    #[test]
    fn body_rests_on_ground() {
        let level = flat_level();
        let mut body = standing_body();

        for _ in 0..10 {
            body.update(1.0, &level);
        }

        assert_relative_eq!(body.pos.y, 416.0);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.falling);
        assert!(!body.jumping);
    }

    #[test]
    fn velocity_is_clamped() {
        let level = flat_level();
        let mut body = standing_body();
        body.vel.x = 50.0;

        body.update(1.0, &level);

        assert_relative_eq!(body.vel.x, 3.0);
        assert_relative_eq!(body.pos.x, 103.0);
    }

    #[test]
    fn wall_stops_horizontal_motion() {
        let mut level = flat_level();
        level.solids.push(Rect::new(134.0, 0.0, 32.0, 448.0));
        let mut body = standing_body();
        body.vel.x = 3.0;

        body.update(1.0, &level);

        assert_relative_eq!(body.pos.x, 102.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn level_edges_act_as_walls() {
        let level = flat_level();
        let mut body = standing_body();
        body.pos.x = 1.0;
        body.vel.x = -3.0;

        body.update(1.0, &level);

        assert_eq!(body.pos.x, 0.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn jump_rises_then_falls_then_lands() {
        let level = flat_level();
        let mut body = standing_body();
        body.update(1.0, &level);

        body.vel.y = -body.max_vel.y;
        body.jumping = true;
        body.update(1.0, &level);
        assert!(body.jumping);
        assert!(body.pos.y < 416.0);

        let mut saw_falling = false;
        for _ in 0..120 {
            body.update(1.0, &level);
            saw_falling |= body.falling;
        }

        assert!(saw_falling);
        assert!(!body.jumping);
        assert!(!body.falling);
        assert_relative_eq!(body.pos.y, 416.0);
    }

    #[test]
    fn ceiling_stops_upward_motion() {
        let mut level = flat_level();
        level.solids.push(Rect::new(0.0, 390.0, 640.0, 15.0));
        let mut body = standing_body();
        body.vel.y = -15.0;
        body.jumping = true;

        body.update(1.0, &level);

        assert_relative_eq!(body.pos.y, 405.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn update_reports_movement() {
        let level = flat_level();
        let mut body = standing_body();
        body.update(1.0, &level);
        assert!(!body.update(1.0, &level), "resting body must not report movement");

        body.vel.x = 2.0;
        assert!(body.update(1.0, &level));
    }
}
