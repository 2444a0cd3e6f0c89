//! Bitmap pixel font
//!
//! Each glyph is 5x7 cells stored as one bitmask per row, drawn as solid
//! squares `scale` units wide. Lowercase letters render as uppercase.

use glam::IVec2;

use crate::sim::Rect;

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
/// Glyph width plus one cell of spacing
const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ' ' => [0; 7],
        // Unknown = filled box
        _ => [0b11111; 7],
    }
}

/// A pixel font at a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFont {
    /// Arena units per glyph cell
    pub scale: i32,
}

impl PixelFont {
    /// Health counters
    pub const HUD: PixelFont = PixelFont { scale: 3 };
    /// Winner announcement
    pub const BANNER: PixelFont = PixelFont { scale: 8 };

    /// Size of the box `text` occupies, without trailing spacing
    pub fn measure(&self, text: &str) -> IVec2 {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return IVec2::ZERO;
        }
        IVec2::new(
            (chars * GLYPH_ADVANCE - 1) * self.scale,
            GLYPH_HEIGHT * self.scale,
        )
    }

    /// One square per lit cell, with the text's top-left corner at `origin`
    pub fn layout(&self, text: &str, origin: IVec2) -> Vec<Rect> {
        let mut cells = Vec::new();
        for (index, c) in text.chars().enumerate() {
            let glyph_x = origin.x + index as i32 * GLYPH_ADVANCE * self.scale;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        cells.push(Rect::new(
                            glyph_x + col * self.scale,
                            origin.y + row as i32 * self.scale,
                            self.scale,
                            self.scale,
                        ));
                    }
                }
            }
        }
        cells
    }
}
