//=========================================================================
// Viewport
//=========================================================================
//
// Camera over the level. It can follow one entity, is clamped to the
// level bounds, and answers visibility queries used by gameplay code.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::EntityId;
use crate::core::physics::{Rect, Vec2};

//=== Axis ================================================================

/// Axes along which the viewport tracks its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

//=== Viewport ============================================================

#[derive(Debug, Clone)]
pub struct Viewport {
    pos: Vec2,
    size: Vec2,
    bounds: Option<Rect>,
    target: Option<(EntityId, Axis)>,
}

impl Viewport {
    /// Creates a viewport of `size` at the origin, unbounded.
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            bounds: None,
            target: None,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Visible area in world coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Entity currently followed.
    pub fn target(&self) -> Option<EntityId> {
        self.target.map(|(id, _)| id)
    }

    /// Returns `true` if `rect` is at least partly inside the view.
    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.rect().overlaps(rect)
    }

    /// Converts a world point to screen coordinates.
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point - self.pos
    }

    //--- Camera Control ---------------------------------------------------

    /// Restricts the viewport to `bounds` (the level area).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.clamp();
    }

    /// Moves the top-left corner, clamped to the bounds.
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.clamp();
    }

    /// Follows `id` along `axis`, replacing any previous target.
    pub fn follow(&mut self, id: EntityId, axis: Axis) {
        debug!("Viewport follows {:?} ({:?})", id, axis);
        self.target = Some((id, axis));
    }

    /// Stops following `id`. Does nothing if another entity is followed.
    pub fn unfollow(&mut self, id: EntityId) {
        if self.target() == Some(id) {
            debug!("Viewport stops following {:?}", id);
            self.target = None;
        }
    }

    /// Centers the view on `rect` along the followed axes.
    ///
    /// Returns `true` if the viewport moved.
    pub fn focus_on(&mut self, rect: &Rect) -> bool {
        let start = self.pos;
        let axis = self.target.map(|(_, axis)| axis).unwrap_or_default();
        let center = rect.center();

        if axis != Axis::Vertical {
            self.pos.x = center.x - self.size.x * 0.5;
        }
        if axis != Axis::Horizontal {
            self.pos.y = center.y - self.size.y * 0.5;
        }
        self.clamp();

        self.pos != start
    }

    //--- Internal Helpers -------------------------------------------------

    fn clamp(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };

        // A level smaller than the view pins the view to its top-left
        let max_x = (bounds.right() - self.size.x).max(bounds.left());
        let max_y = (bounds.bottom() - self.size.y).max(bounds.top());
        self.pos.x = self.pos.x.clamp(bounds.left(), max_x);
        self.pos.y = self.pos.y.clamp(bounds.top(), max_y);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
