use super::*;
use crate::foundation::core::{Canvas, Rgba8};

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn straight_over_keeps_base_alpha_when_layer_is_faint() {
    // White at alpha 30 over an opaque base stays opaque and lightens the color a little.
    let out = over_straight([100, 100, 100, 255], [255, 255, 255, 30], 1.0);
    assert_eq!(out[3], 255);
    assert!(out[0] > 100 && out[0] < 130);
}

#[test]
fn straight_over_on_transparent_corner_stays_clear_under_clear_layer() {
    assert_eq!(over_straight([5, 6, 7, 0], [0, 0, 0, 0], 1.0), [5, 6, 7, 0]);
}

#[test]
fn composite_layers_applies_in_order() {
    let canvas = Canvas::square(2).unwrap();
    let base = PixelBuffer::filled(canvas, Rgba8::new(0, 0, 0, 255));
    let red = PixelBuffer::filled(canvas, Rgba8::new(255, 0, 0, 255));
    let blue = PixelBuffer::filled(canvas, Rgba8::new(0, 0, 255, 255));
    let out = composite_layers(base, &[&red, &blue]).unwrap();
    assert_eq!(out.pixel(1, 1), Rgba8::new(0, 0, 255, 255));
}

#[test]
fn composite_rejects_mismatched_layers() {
    let base = PixelBuffer::transparent(Canvas::square(2).unwrap());
    let layer = PixelBuffer::transparent(Canvas::square(3).unwrap());
    assert!(composite_layers(base, &[&layer]).is_err());
}

#[test]
fn over_at_clips_to_destination() {
    let mut dst = PixelBuffer::transparent(Canvas::square(4).unwrap());
    let src = PixelBuffer::filled(Canvas::square(3).unwrap(), Rgba8::new(9, 9, 9, 255));
    over_at(&mut dst, &src, -1, 2);
    assert_eq!(dst.pixel(0, 2), Rgba8::new(9, 9, 9, 255));
    assert_eq!(dst.pixel(1, 3), Rgba8::new(9, 9, 9, 255));
    assert_eq!(dst.pixel(2, 2), Rgba8::TRANSPARENT);
    assert_eq!(dst.pixel(0, 1), Rgba8::TRANSPARENT);
}
