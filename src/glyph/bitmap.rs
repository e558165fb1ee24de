//! Minimal built-in 5x7 bitmap font, the last link of every text fallback chain.

use crate::foundation::{
    core::{Canvas, PixelBuffer, Rgba8},
    error::FontError,
};
use crate::glyph::draw::GlyphSprite;

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 7;
/// Blank columns between characters, in cells.
const ADVANCE_GAP: u32 = 1;

/// Name reported in diagnostics.
pub const BUILTIN_FONT_NAME: &str = "builtin-5x7";

/// Rows top to bottom; bit 4 is the leftmost column.
fn rows_for(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}

/// Pixel size of one font cell at `point_size`: a 7-cell-tall glyph is roughly the cap height.
pub fn cell_scale(point_size: f32) -> u32 {
    ((point_size / 10.0).round() as u32).max(1)
}

/// Rasterize `text` as solid `color` blocks, `scale` pixels per cell.
pub fn render(text: &str, scale: u32, color: Rgba8) -> Result<GlyphSprite, FontError> {
    if text.is_empty() {
        return Err(FontError::EmptyText);
    }
    let mut glyphs = Vec::new();
    for ch in text.chars() {
        let rows = rows_for(ch.to_ascii_uppercase()).ok_or_else(|| FontError::UnsupportedGlyph {
            font: BUILTIN_FONT_NAME.to_string(),
            ch,
        })?;
        glyphs.push(rows);
    }

    let n = glyphs.len() as u32;
    let cols = n * CELL_WIDTH + (n - 1) * ADVANCE_GAP;
    let canvas = Canvas {
        width: cols * scale,
        height: CELL_HEIGHT * scale,
    };
    let mut pixels = PixelBuffer::transparent(canvas);
    for (i, rows) in glyphs.iter().enumerate() {
        let origin = i as u32 * (CELL_WIDTH + ADVANCE_GAP);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..CELL_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let x0 = (origin + col) * scale;
                let y0 = row as u32 * scale;
                for y in y0..y0 + scale {
                    for x in x0..x0 + scale {
                        pixels.set_pixel(x, y, color);
                    }
                }
            }
        }
    }

    GlyphSprite::from_pixels(pixels).ok_or_else(|| FontError::UnsupportedGlyph {
        font: BUILTIN_FONT_NAME.to_string(),
        ch: text.chars().next().unwrap_or(' '),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/bitmap.rs"]
mod tests;
