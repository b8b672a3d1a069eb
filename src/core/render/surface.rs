//=========================================================================
// Surface
//=========================================================================
//
// Drawing target abstraction and the in-memory RGBA frame buffer the
// game renders into. The platform copies the frame buffer into the
// window's pixel surface after each render pass.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::physics::Rect;

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const SKY: Self = Self::rgb(92, 148, 252);
    pub const GROUND: Self = Self::rgb(136, 84, 32);
    pub const PLAYER: Self = Self::rgb(228, 52, 52);
    pub const GOLD: Self = Self::rgb(252, 200, 40);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

//=== Surface Trait =======================================================

/// Anything the game can draw on.
///
/// Coordinates are in surface pixels; rectangles partially outside the
/// surface are clipped, rectangles fully outside are ignored.
pub trait Surface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface.
    fn clear(&mut self, color: Color);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

//=== FrameBuffer =========================================================

/// CPU-side RGBA8 frame buffer.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Returns the color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Copies the buffer into an RGBA8 byte slice of matching size.
    ///
    /// Extra bytes in `out` are left untouched; missing bytes truncate
    /// the copy.
    pub fn copy_into(&self, out: &mut [u8]) {
        for (dst, color) in out.chunks_exact_mut(4).zip(&self.pixels) {
            dst.copy_from_slice(&color.to_bytes());
        }
    }

    /// Counts pixels of a given color.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.left().floor().max(0.0) as i64;
        let y0 = rect.top().floor().max(0.0) as i64;
        let x1 = rect.right().floor().min(self.width as f32) as i64;
        let y1 = rect.bottom().floor().min(self.height as f32) as i64;

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let width = self.width as usize;
        for y in y0 as usize..y1 as usize {
            let row = y * width;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
