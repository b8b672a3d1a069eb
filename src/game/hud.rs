//=========================================================================
// HUD
//=========================================================================
//
// Screen-space overlay drawn above everything else. The container owns
// its items and forwards updates to them; the only item is the score,
// shown as an 8-digit binary number in the bottom-right corner.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::{GameAction, GameFrame, Screen, HUD_KIND};
use crate::core::globals::GameState;
use crate::core::physics::{Rect, Vec2};
use crate::core::render::{Align, BitmapFont, Surface};
use crate::core::world::Entity;

//=== Constants ===========================================================

/// Distance of the score from the right and bottom screen edges.
const SCORE_MARGIN: f32 = 10.0;

/// Binary form of the score, zero-padded to 8 digits.
///
/// Scores above 255 simply get longer.
pub fn format_score(score: u32) -> String {
    format!("{:08b}", score)
}

//=== ScoreItem ===========================================================

pub struct ScoreItem {
    /// Bottom-right corner of the text, in screen pixels.
    anchor: Vec2,
    font: Arc<BitmapFont>,

    /// Score shown by the last draw, -1 before the first update.
    last_score: i64,
}

impl ScoreItem {
    pub fn new(anchor: Vec2, font: Arc<BitmapFont>) -> Self {
        Self {
            anchor,
            font,
            last_score: -1,
        }
    }

    /// Picks up the current score. Returns `true` if it changed.
    pub fn update(&mut self, state: &GameState) -> bool {
        let score = i64::from(state.score);
        if score == self.last_score {
            return false;
        }
        self.last_score = score;
        true
    }

    pub fn last_score(&self) -> i64 {
        self.last_score
    }

    pub fn text(&self) -> String {
        format_score(u32::try_from(self.last_score).unwrap_or(0))
    }

    pub fn draw(&self, surface: &mut dyn Surface, offset: Vec2) {
        let text = self.text();
        let height = self.font.measure(&text).y;
        let anchor = Vec2::new(self.anchor.x, self.anchor.y - height) + offset;
        self.font.draw(surface, &text, anchor, Align::Right);
    }
}

//=== HudContainer ========================================================

pub struct HudContainer {
    size: Vec2,
    children: Vec<ScoreItem>,
}

impl HudContainer {
    /// Builds the HUD for a view of `view_size` pixels.
    pub fn new(view_size: Vec2, font: Arc<BitmapFont>) -> Self {
        let anchor = Vec2::new(view_size.x - SCORE_MARGIN, view_size.y - SCORE_MARGIN);
        Self {
            size: view_size,
            children: vec![ScoreItem::new(anchor, font)],
        }
    }

    pub fn children(&self) -> &[ScoreItem] {
        &self.children
    }
}

impl Entity<Screen, GameAction> for HudContainer {
    fn kind(&self) -> &'static str {
        HUD_KIND
    }

    fn bounds(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.size)
    }

    fn is_collidable(&self) -> bool {
        false
    }

    fn is_persistent(&self) -> bool {
        true
    }

    fn z_order(&self) -> i32 {
        i32::MAX
    }

    fn is_floating(&self) -> bool {
        true
    }

    fn update(&mut self, ctx: &mut GameFrame<'_>) -> bool {
        let state = &*ctx.state;
        self.children.iter_mut().fold(false, |dirty, child| child.update(state) || dirty)
    }

    fn draw(&self, surface: &mut dyn Surface, offset: Vec2) {
        for child in &self.children {
            child.draw(surface, offset);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
