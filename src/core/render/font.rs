//=========================================================================
// Bitmap Font
//=========================================================================
//
// Fixed-cell bitmap font. Glyphs are rows of characters where `#` marks
// a lit cell; each lit cell is drawn as a `scale × scale` square.
//
// RON definition:
// ```text
// (
//     glyph_width: 5,
//     glyph_height: 7,
//     scale: 2,
//     color: (r: 255, g: 255, b: 255),
//     glyphs: {
//         '0': [".###.", "#...#", ...],
//     },
// )
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::surface::{Color, Surface};
use crate::core::physics::{Rect, Vec2};
use crate::error::AssetError;

//=== Align ===============================================================

/// Horizontal anchoring of drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Anchor is the left edge of the text.
    #[default]
    Left,

    /// Anchor is the right edge of the text.
    Right,
}

//=== FontDef =============================================================

/// Serialized font description.
#[derive(Debug, Clone, Deserialize)]
pub struct FontDef {
    pub glyph_width: u32,
    pub glyph_height: u32,
    #[serde(default = "one")]
    pub scale: u32,
    #[serde(default = "one")]
    pub spacing: u32,
    pub color: Color,
    pub glyphs: HashMap<char, Vec<String>>,
}

fn one() -> u32 {
    1
}

//=== BitmapFont ==========================================================

/// Validated, ready-to-draw bitmap font.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    glyph_width: u32,
    glyph_height: u32,
    scale: u32,
    spacing: u32,
    color: Color,
    glyphs: HashMap<char, Vec<Vec<bool>>>,
}

impl BitmapFont {
    //--- Construction -----------------------------------------------------

    /// Validates a font definition.
    pub fn from_def(def: FontDef) -> Result<Self, AssetError> {
        if def.glyph_width == 0 || def.glyph_height == 0 || def.scale == 0 {
            return Err(AssetError::InvalidFont(
                "glyph size and scale must be positive".to_string(),
            ));
        }

        let mut glyphs = HashMap::with_capacity(def.glyphs.len());
        for (ch, rows) in def.glyphs {
            if rows.len() != def.glyph_height as usize {
                return Err(AssetError::InvalidFont(format!(
                    "glyph {:?} has {} rows, expected {}",
                    ch,
                    rows.len(),
                    def.glyph_height
                )));
            }

            let mut cells = Vec::with_capacity(rows.len());
            for row in &rows {
                if row.chars().count() != def.glyph_width as usize {
                    return Err(AssetError::InvalidFont(format!(
                        "glyph {:?} row {:?} is not {} cells wide",
                        ch, row, def.glyph_width
                    )));
                }
                cells.push(row.chars().map(|c| c == '#').collect());
            }
            glyphs.insert(ch, cells);
        }

        Ok(Self {
            glyph_width: def.glyph_width,
            glyph_height: def.glyph_height,
            scale: def.scale,
            spacing: def.spacing,
            color: def.color,
            glyphs,
        })
    }

    /// Parses and validates a RON font definition.
    pub fn from_ron_str(source: &str) -> Result<Self, AssetError> {
        let def: FontDef = ron::from_str(source).map_err(|e| AssetError::Parse {
            path: "<font>".into(),
            message: e.to_string(),
        })?;
        Self::from_def(def)
    }

    /// Built-in 5×7 digit font, used when no font resource is loaded.
    pub fn builtin() -> Self {
        const DIGITS: [(char, [&str; 7]); 10] = [
            ('0', [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
            ('1', ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
            ('2', [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
            ('3', ["####.", "....#", "....#", ".###.", "....#", "....#", "####."]),
            ('4', ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
            ('5', ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
            ('6', [".###.", "#....", "#....", "####.", "#...#", "#...#", ".###."]),
            ('7', ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
            ('8', [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
            ('9', [".###.", "#...#", "#...#", ".####", "....#", "....#", ".###."]),
        ];

        let glyphs: HashMap<char, Vec<Vec<bool>>> = DIGITS
            .iter()
            .map(|(ch, rows)| {
                let cells: Vec<Vec<bool>> = rows.iter().map(|r| r.chars().map(|c| c == '#').collect()).collect();
                (*ch, cells)
            })
            .collect();

        Self {
            glyph_width: 5,
            glyph_height: 7,
            scale: 2,
            spacing: 1,
            color: Color::WHITE,
            glyphs,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the font has a glyph for `ch`.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Size of `text` once drawn, in pixels.
    pub fn measure(&self, text: &str) -> Vec2 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return Vec2::ZERO;
        }
        let advance = (self.glyph_width + self.spacing) * self.scale;
        let width = advance * count - self.spacing * self.scale;
        Vec2::new(width as f32, (self.glyph_height * self.scale) as f32)
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws `text` with its top edge at `anchor.y`.
    ///
    /// Characters without a glyph advance the cursor but draw nothing.
    pub fn draw(&self, surface: &mut dyn Surface, text: &str, anchor: Vec2, align: Align) {
        let origin_x = match align {
            Align::Left => anchor.x,
            Align::Right => anchor.x - self.measure(text).x,
        };

        let cell = self.scale as f32;
        let advance = ((self.glyph_width + self.spacing) * self.scale) as f32;

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = self.glyphs.get(&ch) else {
                continue;
            };

            let glyph_x = origin_x + advance * i as f32;
            for (row_idx, row) in rows.iter().enumerate() {
                for (col_idx, &lit) in row.iter().enumerate() {
                    if lit {
                        let rect = Rect::new(
                            glyph_x + col_idx as f32 * cell,
                            anchor.y + row_idx as f32 * cell,
                            cell,
                            cell,
                        );
                        surface.fill_rect(rect, self.color);
                    }
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
