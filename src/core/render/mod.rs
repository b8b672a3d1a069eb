//=========================================================================
// Rendering
//=========================================================================
//
// Software rendering primitives: a `Surface` trait, the RGBA frame
// buffer implementing it, and the bitmap font used by the HUD.
//
//=========================================================================

//=== Module Declarations =================================================

mod font;
mod surface;

//=== Public API ==========================================================

pub use font::{Align, BitmapFont, FontDef};
pub use surface::{Color, FrameBuffer, Surface};
