use crate::foundation::core::{Canvas, PixelBuffer};
use crate::render::composite::over_at;

/// Vertical bias applied when centering emoji, in pixels (moves the glyph up).
pub const EMOJI_BASELINE_NUDGE: i64 = 10;
/// Vertical bias applied when centering plain text, in pixels (moves the glyph up).
pub const TEXT_BASELINE_NUDGE: i64 = 5;

/// A rasterized run of text together with the tight box of its visible pixels.
///
/// Placement works on the ink box rather than on font metrics, so a sprite from an outline
/// font, a color bitmap font and the built-in block font all center the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSprite {
    pixels: PixelBuffer,
    ink: (u32, u32, u32, u32),
}

impl GlyphSprite {
    /// `None` when `pixels` has no visible ink.
    pub fn from_pixels(pixels: PixelBuffer) -> Option<Self> {
        let ink = pixels.ink_bounds()?;
        Some(Self { pixels, ink })
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// `(x0, y0, x1, y1)` with exclusive max edges, in sprite coordinates.
    pub fn ink_bounds(&self) -> (u32, u32, u32, u32) {
        self.ink
    }

    pub fn ink_width(&self) -> u32 {
        self.ink.2 - self.ink.0
    }

    pub fn ink_height(&self) -> u32 {
        self.ink.3 - self.ink.1
    }
}

/// Where a sprite's ink box lands on the destination canvas. Horizontal placement is always
/// centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Vertically centered, then raised by `nudge` pixels.
    Centered { nudge: i64 },
    /// Ink top edge at row `top`.
    Top { top: i64 },
}

/// Top-left corner, in destination coordinates, at which the sprite buffer must be drawn.
pub fn placement_origin(canvas: Canvas, sprite: &GlyphSprite, anchor: Anchor) -> (i64, i64) {
    let (x0, y0, _, _) = sprite.ink;
    let ink_left = (i64::from(canvas.width) - i64::from(sprite.ink_width())).div_euclid(2);
    let ink_top = match anchor {
        Anchor::Centered { nudge } => {
            (i64::from(canvas.height) - i64::from(sprite.ink_height())).div_euclid(2) - nudge
        }
        Anchor::Top { top } => top,
    };
    (ink_left - i64::from(x0), ink_top - i64::from(y0))
}

/// Composite `sprite` onto `dst` at `anchor`, clipping anything outside the canvas.
pub fn place(dst: &mut PixelBuffer, sprite: &GlyphSprite, anchor: Anchor) {
    let (left, top) = placement_origin(dst.canvas(), sprite, anchor);
    over_at(dst, &sprite.pixels, left, top);
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/draw.rs"]
mod tests;
