//=========================================================================
// Frame Clock
//
// Turns redraw timing into a whole number of fixed game ticks.
//
// The game always advances in ticks of `frame_time` (dt = 1.0), however
// often the display asks for a redraw:
//   60 Hz  → one tick per redraw
//   144 Hz → a tick on roughly every 2.4th redraw
//   stall  → up to `max_steps` ticks, the rest of the backlog is dropped
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== FrameClock ==========================================================

pub(crate) struct FrameClock {
    frame_time: Duration,
    max_steps: u32,
    backlog: Duration,
}

impl FrameClock {
    pub fn new(frame_time: Duration, max_steps: u32) -> Self {
        Self {
            frame_time: frame_time.max(Duration::from_micros(1)),
            max_steps: max_steps.max(1),
            backlog: Duration::ZERO,
        }
    }

    /// Adds `elapsed` wall time and returns how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.backlog += elapsed;

        let mut steps = 0;
        while self.backlog >= self.frame_time && steps < self.max_steps {
            self.backlog -= self.frame_time;
            steps += 1;
        }

        if steps == self.max_steps && self.backlog >= self.frame_time {
            self.backlog = Duration::ZERO;
        }
        steps
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::{Body, LevelGeometry, Rect, Vec2};

    const TICK: Duration = Duration::from_nanos(16_666_666);

    #[test]
    fn one_tick_per_frame_time() {
        let mut clock = FrameClock::new(TICK, 3);
        assert_eq!(clock.advance(TICK), 1);
        assert_eq!(clock.advance(TICK / 2), 0);
        assert_eq!(clock.advance(TICK / 2), 1);
    }

    #[test]
    fn stall_is_capped_and_backlog_dropped() {
        let mut clock = FrameClock::new(TICK, 3);
        assert_eq!(clock.advance(Duration::from_secs(1)), 3);
        assert_eq!(clock.advance(Duration::ZERO), 0);
        assert_eq!(clock.advance(TICK), 1);
    }

    /// Runs `seconds` of redraws at `refresh_hz`: the body runs right and
    /// jumps on its first tick. Returns (jump height, distance run, ticks).
    fn run_and_jump(refresh_hz: u32, seconds: u32) -> (f32, f32, u32) {
        let level = LevelGeometry {
            width: 4000.0,
            height: 480.0,
            solids: vec![Rect::new(0.0, 448.0, 4000.0, 32.0)],
            gravity: 0.98,
        };
        let mut body = Body::new(Vec2::new(0.0, 416.0), Vec2::new(32.0, 32.0));
        body.set_velocity(3.0, 15.0);

        let mut clock = FrameClock::new(TICK, 3);
        let redraw = Duration::from_secs(1) / refresh_hz;
        let mut ticks = 0;
        let mut peak = body.pos.y;

        for _ in 0..refresh_hz * seconds {
            for _ in 0..clock.advance(redraw) {
                body.vel.x += body.accel.x;
                if ticks == 0 {
                    body.vel.y = -body.max_vel.y;
                    body.jumping = true;
                }
                body.update(1.0, &level);
                peak = peak.min(body.pos.y);
                ticks += 1;
            }
        }

        (416.0 - peak, body.pos.x, ticks)
    }

    #[test]
    fn motion_does_not_depend_on_refresh_rate() {
        let (jump_60, run_60, ticks_60) = run_and_jump(60, 2);

        for hz in [75, 120, 144, 240] {
            let (jump, run, ticks) = run_and_jump(hz, 2);
            assert_eq!(jump, jump_60, "jump height at {} Hz", hz);
            assert!(ticks.abs_diff(ticks_60) <= 1, "{} ticks at {} Hz vs {}", ticks, hz, ticks_60);
            assert!((run - run_60).abs() <= 3.0, "ran {} at {} Hz vs {}", run, hz, run_60);
        }

        // High enough to reach the 96 px platforms of the first level
        assert!(jump_60 > 96.0, "jump height {}", jump_60);
    }
}
