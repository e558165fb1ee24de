use crate::foundation::error::{ForgeError, ForgeResult};

pub use kurbo::{Point, Rect};

/// Opaque 8-bit RGB color, written as `#RRGGBB` in catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> ForgeResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ForgeError::validation(format!(
                "color '{s}' must be #RRGGBB"
            )));
        }
        let channel = |i: usize| -> ForgeResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ForgeError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, a)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ForgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ForgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ForgeError::validation("canvas must be at least 1x1"));
        }
        Ok(Self { width, height })
    }

    pub fn square(side: u32) -> ForgeResult<Self> {
        Self::new(side, side)
    }

    /// Integer center, rounded down on odd sizes.
    pub fn center(self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn byte_len(self) -> usize {
        self.pixel_count() * 4
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Row-major straight RGBA8 pixels.
///
/// Every layer of a synthesized image is one of these; each is owned by the item being
/// synthesized and dropped once its PNG has been encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0u8; canvas.byte_len()],
        }
    }

    pub fn filled(canvas: Canvas, color: Rgba8) -> Self {
        Self {
            canvas,
            data: color.to_array().repeat(canvas.pixel_count()),
        }
    }

    pub fn from_rgba8(canvas: Canvas, data: Vec<u8>) -> ForgeResult<Self> {
        if data.len() != canvas.byte_len() {
            return Err(ForgeError::render(format!(
                "pixel data is {} bytes, expected {} for {}x{}",
                data.len(),
                canvas.byte_len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }

    /// Panics when `(x, y)` is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.index(x, y);
        Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Panics when `(x, y)` is outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px.to_array());
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.index(0, y);
        let end = start + (self.canvas.width as usize) * 4;
        &mut self.data[start..end]
    }

    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Drop the alpha channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.canvas.pixel_count() * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }

    /// Tight bounds of all pixels with non-zero alpha, as `(x0, y0, x1, y1)` with exclusive
    /// max edges. `None` when the buffer is fully transparent.
    pub fn ink_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..h {
            for x in 0..w {
                if self.data[self.index(x, y) + 3] == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                });
            }
        }
        bounds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
