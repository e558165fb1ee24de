use crate::foundation::{
    core::{Canvas, PixelBuffer, Rgb8},
    error::{ForgeError, ForgeResult},
    math::lerp_channel,
};

/// How a gradient's stops are spread across the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    /// Two stops, blended by distance from the canvas center.
    Radial,
    /// Two or more stops, blended top to bottom in equal-height bands.
    LinearVertical,
}

/// Ordered color stops plus the interpolation mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GradientSpecDef")]
pub struct GradientSpec {
    mode: GradientMode,
    stops: Vec<Rgb8>,
}

#[derive(serde::Deserialize)]
struct GradientSpecDef {
    mode: GradientMode,
    stops: Vec<Rgb8>,
}

impl TryFrom<GradientSpecDef> for GradientSpec {
    type Error = ForgeError;

    fn try_from(def: GradientSpecDef) -> Result<Self, Self::Error> {
        Self::new(def.mode, def.stops)
    }
}

impl GradientSpec {
    pub fn new(mode: GradientMode, stops: Vec<Rgb8>) -> ForgeResult<Self> {
        match mode {
            GradientMode::Radial if stops.len() != 2 => Err(ForgeError::validation(format!(
                "radial gradient needs exactly 2 stops, got {}",
                stops.len()
            ))),
            GradientMode::LinearVertical if stops.len() < 2 => {
                Err(ForgeError::validation(format!(
                    "linear gradient needs at least 2 stops, got {}",
                    stops.len()
                )))
            }
            _ => Ok(Self { mode, stops }),
        }
    }

    pub fn radial(inner: Rgb8, outer: Rgb8) -> Self {
        Self {
            mode: GradientMode::Radial,
            stops: vec![inner, outer],
        }
    }

    pub fn linear_vertical(stops: Vec<Rgb8>) -> ForgeResult<Self> {
        Self::new(GradientMode::LinearVertical, stops)
    }

    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    pub fn stops(&self) -> &[Rgb8] {
        &self.stops
    }
}

/// Render an opaque buffer of exactly `canvas` size.
pub fn render_gradient(canvas: Canvas, gradient: &GradientSpec) -> PixelBuffer {
    match gradient.mode {
        GradientMode::Radial => render_radial(canvas, gradient.stops[0], gradient.stops[1]),
        GradientMode::LinearVertical => render_linear_vertical(canvas, &gradient.stops),
    }
}

pub fn render_solid(canvas: Canvas, color: Rgb8) -> PixelBuffer {
    PixelBuffer::filled(canvas, color.with_alpha(255))
}

fn mix(a: Rgb8, b: Rgb8, t: f64) -> [u8; 4] {
    [
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
        255,
    ]
}

fn render_radial(canvas: Canvas, inner: Rgb8, outer: Rgb8) -> PixelBuffer {
    let mut out = PixelBuffer::transparent(canvas);
    let (cx, cy) = canvas.center();
    let (cx, cy) = (f64::from(cx), f64::from(cy));
    let max_radius = (cx * cx + cy * cy).sqrt();

    for y in 0..canvas.height {
        let dy = f64::from(y) - cy;
        let row = out.row_mut(y);
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let dx = x as f64 - cx;
            let ratio = if max_radius > 0.0 {
                ((dx * dx + dy * dy).sqrt() / max_radius).min(1.0)
            } else {
                0.0
            };
            px.copy_from_slice(&mix(inner, outer, ratio));
        }
    }
    out
}

fn render_linear_vertical(canvas: Canvas, stops: &[Rgb8]) -> PixelBuffer {
    let mut out = PixelBuffer::transparent(canvas);
    let bands = (stops.len() - 1) as u32;
    let band_height = (canvas.height / bands).max(1);
    let last_row = canvas.height.saturating_sub(1);

    for y in 0..canvas.height {
        let band = (y / band_height).min(bands - 1);
        let start = band * band_height;
        let span = if band == bands - 1 {
            // Last band runs through the final row so it lands exactly on the last stop.
            canvas.height.saturating_sub(1).saturating_sub(start).max(1)
        } else {
            band_height
        };
        let t = (f64::from(y - start) / f64::from(span)).clamp(0.0, 1.0);
        let c = if y > 0 && y == last_row {
            // Canvases shorter than the band count still end on the final stop.
            mix(stops[bands as usize - 1], stops[bands as usize], 1.0)
        } else {
            mix(stops[band as usize], stops[band as usize + 1], t)
        };
        for px in out.row_mut(y).chunks_exact_mut(4) {
            px.copy_from_slice(&c);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
