//=========================================================================
// Screens
//=========================================================================
//
// Menu → Play on jump. Play reloads itself on restart or when the player
// leaves the view.
//
//=========================================================================

mod menu;
mod play;

pub use menu::MenuScreen;
pub use play::PlayScreen;
