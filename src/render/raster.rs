//! Bridge between [`PixelBuffer`] and the `vello_cpu` rasterizer.

use crate::foundation::{
    core::{Canvas, PixelBuffer},
    error::{ForgeError, ForgeResult},
    math::unpremultiply,
};

/// Pixmap dimensions are `u16` in `vello_cpu`.
pub(crate) fn pixmap_size(canvas: Canvas) -> ForgeResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ForgeError::render("pixmap width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ForgeError::render("pixmap height exceeds u16"))?;
    Ok((w, h))
}

/// Run `draw` against a fresh render context and return the rasterized straight-alpha layer.
pub(crate) fn rasterize(
    canvas: Canvas,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> ForgeResult<PixelBuffer> {
    let (w, h) = pixmap_size(canvas)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    draw(&mut ctx);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap_to_buffer(canvas, &pixmap)
}

pub(crate) fn pixmap_to_buffer(
    canvas: Canvas,
    pixmap: &vello_cpu::Pixmap,
) -> ForgeResult<PixelBuffer> {
    let mut data = pixmap.data_as_u8_slice().to_vec();
    for px in data.chunks_exact_mut(4) {
        let straight = unpremultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&straight);
    }
    PixelBuffer::from_rgba8(canvas, data)
}

pub(crate) fn shape_to_path(shape: &impl vello_cpu::kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        p.push(el);
    }
    p
}
