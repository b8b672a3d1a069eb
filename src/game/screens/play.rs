//=========================================================================
// Play Screen
//=========================================================================
//
// on_enter: load level → reset score → attach a fresh HUD
// on_exit:  detach the HUD
//
// A reload (Play → Play) runs both, so nothing of the previous attempt
// survives.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::render::BitmapFont;
use crate::core::scene::Scene;
use crate::core::world::EntityId;
use crate::game::{GameAction, GameContext, HudContainer, Screen, HUD_FONT};

//=== PlayScreen ==========================================================

pub struct PlayScreen {
    level: String,
    hud: Option<EntityId>,
}

impl PlayScreen {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            hud: None,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn hud(&self) -> Option<EntityId> {
        self.hud
    }
}

impl Scene<Screen, GameAction> for PlayScreen {
    fn on_enter(&mut self, ctx: &mut GameContext) {
        info!("Entering play on level '{}'", self.level);

        ctx.load_level(&self.level);
        ctx.state.reset();

        let font = ctx
            .assets
            .font(HUD_FONT)
            .unwrap_or_else(|| Arc::new(BitmapFont::builtin()));
        let hud = HudContainer::new(ctx.viewport.size(), font);
        self.hud = Some(ctx.world.add(Box::new(hud), &mut ctx.viewport));
    }

    fn on_exit(&mut self, ctx: &mut GameContext) {
        if let Some(hud) = self.hud.take() {
            ctx.world.remove(hud);
        }
    }

    fn update(&mut self, ctx: &mut GameContext) -> bool {
        ctx.update_world()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
