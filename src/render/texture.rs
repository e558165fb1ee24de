use crate::foundation::{
    core::{Canvas, PixelBuffer, Rgba8},
    error::ForgeResult,
};
use crate::render::{
    composite::over_in_place,
    raster::{rasterize, shape_to_path},
};

/// Distance between motif centers, both axes.
pub const SCALE_GRID_SPACING: u32 = 40;
/// Radius of one scale.
pub const SCALE_RADIUS: f64 = 15.0;
/// Outline thickness of one scale.
pub const SCALE_STROKE_WIDTH: f64 = 2.0;
/// Outline color; the low alpha is what keeps the motif subtle.
pub const SCALE_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 30);

/// Centers of the brick-offset scale grid: every odd row shifts right by half a cell.
pub fn scale_centers(canvas: Canvas) -> Vec<(f64, f64)> {
    let step = SCALE_GRID_SPACING as usize;
    let mut out = Vec::new();
    for y in (0..canvas.height).step_by(step) {
        let offset = if (y / SCALE_GRID_SPACING) % 2 == 1 {
            SCALE_GRID_SPACING / 2
        } else {
            0
        };
        for x in (0..canvas.width).step_by(step) {
            out.push((f64::from(x + offset), f64::from(y)));
        }
    }
    out
}

/// Transparent layer holding the scale motif.
pub fn scale_texture_layer(canvas: Canvas) -> ForgeResult<PixelBuffer> {
    let centers = scale_centers(canvas);
    rasterize(canvas, |ctx| {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            SCALE_COLOR.r,
            SCALE_COLOR.g,
            SCALE_COLOR.b,
            SCALE_COLOR.a,
        ));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(SCALE_STROKE_WIDTH));
        // Stroke centered inside the radius so the outer edge sits on the motif radius.
        let r = SCALE_RADIUS - SCALE_STROKE_WIDTH / 2.0;
        for &(cx, cy) in &centers {
            let circle = vello_cpu::kurbo::Circle::new((cx, cy), r);
            ctx.stroke_path(&shape_to_path(&circle));
        }
    })
}

/// Stamp the scale motif over `base`.
#[tracing::instrument(skip(base), fields(w = base.width(), h = base.height()))]
pub fn apply_scale_texture(base: &mut PixelBuffer) -> ForgeResult<()> {
    let layer = scale_texture_layer(base.canvas())?;
    over_in_place(base, &layer, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/texture.rs"]
mod tests;
