use crate::foundation::core::PixelBuffer;

/// 3x3 smoothing kernel, row-major.
pub const SMOOTH_KERNEL: [u32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];
const SMOOTH_DIVISOR: u32 = 13;

/// Soften hard edges with [`SMOOTH_KERNEL`], applied to every channel independently.
///
/// The one-pixel border is copied from the source unchanged.
pub fn smooth(src: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut out = src.clone();
    if w < 3 || h < 3 {
        return out;
    }

    let data = src.as_bytes();
    let stride = (w as usize) * 4;
    let dst = out.as_bytes_mut();
    for y in 1..(h as usize - 1) {
        for x in 1..(w as usize - 1) {
            let mut acc = [0u32; 4];
            for (ki, &kw) in SMOOTH_KERNEL.iter().enumerate() {
                let sy = y + ki / 3 - 1;
                let sx = x + ki % 3 - 1;
                let idx = sy * stride + sx * 4;
                for c in 0..4 {
                    acc[c] += kw * u32::from(data[idx + c]);
                }
            }
            let out_idx = y * stride + x * 4;
            for c in 0..4 {
                dst[out_idx + c] = ((acc[c] + SMOOTH_DIVISOR / 2) / SMOOTH_DIVISOR).min(255) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/filter.rs"]
mod tests;
