use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(lerp_channel(10, 250, 0.0), 10);
    assert_eq!(lerp_channel(10, 250, 1.0), 250);
    assert_eq!(lerp_channel(250, 10, 1.0), 10);
}

#[test]
fn lerp_truncates_instead_of_rounding() {
    // 0 + 255 * 0.999 = 254.745
    assert_eq!(lerp_channel(0, 255, 0.999), 254);
    // 255 - 255 * 0.001 = 254.745
    assert_eq!(lerp_channel(255, 0, 0.001), 254);
}

#[test]
fn lerp_clamps_out_of_range_factors() {
    assert_eq!(lerp_channel(0, 255, 2.0), 255);
    assert_eq!(lerp_channel(255, 0, 2.0), 0);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn premultiply_roundtrip_is_close_for_visible_alpha() {
    for a in [30u8, 80, 128, 230, 255] {
        let px = [200, 100, 7, a];
        let back = unpremultiply(premultiply(px));
        for c in 0..3 {
            assert!((i16::from(back[c]) - i16::from(px[c])).abs() <= 255 / i16::from(a) + 1);
        }
        assert_eq!(back[3], a);
    }
}

#[test]
fn zero_alpha_clears_color() {
    assert_eq!(premultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
}
