use crate::foundation::{
    core::PixelBuffer,
    error::{ForgeError, ForgeResult},
    math::{add_sat_u8, mul_div255_u8, premultiply, unpremultiply},
};

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over with an extra layer opacity.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Source-over on straight-alpha pixels.
pub fn over_straight(dst: [u8; 4], src: [u8; 4], opacity: f32) -> [u8; 4] {
    if src[3] == 255 && opacity >= 1.0 {
        return src;
    }
    if src[3] == 0 || opacity <= 0.0 {
        return dst;
    }
    unpremultiply(over(premultiply(dst), premultiply(src), opacity))
}

/// Composite `src` over `dst` in place. Both buffers must share a canvas.
pub fn over_in_place(dst: &mut PixelBuffer, src: &PixelBuffer, opacity: f32) -> ForgeResult<()> {
    if dst.canvas() != src.canvas() {
        return Err(ForgeError::render(format!(
            "cannot composite {}x{} layer over {}x{} base",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }
    for (d, s) in dst
        .as_bytes_mut()
        .chunks_exact_mut(4)
        .zip(src.as_bytes().chunks_exact(4))
    {
        let out = over_straight([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Stack `layers` bottom-to-top over `base`.
pub fn composite_layers(mut base: PixelBuffer, layers: &[&PixelBuffer]) -> ForgeResult<PixelBuffer> {
    for layer in layers {
        over_in_place(&mut base, layer, 1.0)?;
    }
    Ok(base)
}

/// Composite `src` over `dst` with its top-left corner at `(left, top)`, clipping to `dst`.
pub fn over_at(dst: &mut PixelBuffer, src: &PixelBuffer, left: i64, top: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    for sy in 0..src.height() {
        let y = top + i64::from(sy);
        if y < 0 || y >= dh {
            continue;
        }
        for sx in 0..src.width() {
            let x = left + i64::from(sx);
            if x < 0 || x >= dw {
                continue;
            }
            let s = src.pixel(sx, sy);
            if s.a == 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            let d = dst.pixel(x, y);
            let out = over_straight(d.to_array(), s.to_array(), 1.0);
            dst.set_pixel(x, y, crate::foundation::core::Rgba8::from_array(out));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
