//=========================================================================
// Menu Screen
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::physics::Rect;
use crate::core::render::{Color, Surface};
use crate::core::scene::{Scene, SceneTransition};
use crate::game::{GameAction, GameContext, Screen};

//=== MenuScreen ==========================================================

/// Title card; the jump key starts the game.
#[derive(Debug, Default)]
pub struct MenuScreen;

impl MenuScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Scene<Screen, GameAction> for MenuScreen {
    fn on_enter(&mut self, _ctx: &mut GameContext) {
        info!("Entered menu");
    }

    fn update(&mut self, ctx: &mut GameContext) -> bool {
        if ctx.actions.is_active(GameAction::Jump) {
            ctx.scene_transitions.push(SceneTransition::Change(Screen::Play));
        }
        false
    }

    fn render(&self, _ctx: &GameContext, surface: &mut dyn Surface) {
        let (w, h) = surface.size();
        let (w, h) = (w as f32, h as f32);

        surface.clear(Color::SKY);
        surface.fill_rect(Rect::new(0.0, h * 0.8, w, h * 0.2), Color::GROUND);

        let coin = h * 0.15;
        surface.fill_rect(Rect::new((w - coin) * 0.5, (h - coin) * 0.5, coin, coin), Color::GOLD);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::GlobalContext;
    use crate::core::physics::Vec2;
    use crate::core::render::FrameBuffer;

    #[test]
    fn jump_starts_the_game() {
        let mut ctx = GlobalContext::new(Vec2::new(320.0, 240.0));
        let mut menu = MenuScreen::new();

        menu.update(&mut ctx);
        assert!(ctx.scene_transitions.is_empty());

        ctx.actions.activate(GameAction::Jump);
        menu.update(&mut ctx);
        assert_eq!(ctx.scene_transitions.len(), 1);
    }

    #[test]
    fn renders_title_card() {
        let ctx = GlobalContext::new(Vec2::new(100.0, 100.0));
        let mut fb = FrameBuffer::new(100, 100);

        MenuScreen::new().render(&ctx, &mut fb);

        assert_eq!(fb.pixel(0, 0), Some(Color::SKY));
        assert_eq!(fb.pixel(0, 99), Some(Color::GROUND));
        assert_eq!(fb.pixel(50, 50), Some(Color::GOLD));
    }
}
