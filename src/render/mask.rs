use kurbo::{Ellipse, Shape as _};

use crate::foundation::{
    core::{Canvas, PixelBuffer, Point},
    error::{ForgeError, ForgeResult},
};

/// 8-bit opacity mask, one byte per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    canvas: Canvas,
    alpha: Vec<u8>,
}

impl AlphaMask {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.alpha[(y as usize) * (self.canvas.width as usize) + (x as usize)]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.alpha
    }
}

/// Hard-edged mask of the ellipse inscribed in the full canvas rectangle.
///
/// A pixel is opaque when its center lies inside the ellipse; there is no anti-aliased rim.
pub fn circular_mask(canvas: Canvas) -> AlphaMask {
    let ellipse = Ellipse::from_rect(canvas.bounds());
    let mut alpha = vec![0u8; canvas.pixel_count()];
    for y in 0..canvas.height {
        let row = (y as usize) * (canvas.width as usize);
        for x in 0..canvas.width {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if ellipse.contains(center) {
                alpha[row + x as usize] = 255;
            }
        }
    }
    AlphaMask { canvas, alpha }
}

/// Replace the alpha channel of `buf` with `mask`.
pub fn apply_mask(buf: &mut PixelBuffer, mask: &AlphaMask) -> ForgeResult<()> {
    if buf.canvas() != mask.canvas {
        return Err(ForgeError::render(format!(
            "mask {}x{} does not match buffer {}x{}",
            mask.canvas.width,
            mask.canvas.height,
            buf.width(),
            buf.height()
        )));
    }
    for (px, &a) in buf.as_bytes_mut().chunks_exact_mut(4).zip(&mask.alpha) {
        px[3] = a;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
