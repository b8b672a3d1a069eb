//=========================================================================
// Game State
//=========================================================================

/// Session data shared by screens and entities.
///
/// Reset by the play screen on entry, incremented by coin pickups and
/// read by the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
