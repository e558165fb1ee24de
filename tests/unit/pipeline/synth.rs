use super::*;
use crate::foundation::core::Rgb8;
use crate::palette::catalog::PaletteCatalog;

fn offline(profile: SynthesisProfile) -> SynthesisProfile {
    profile.builtin_fonts_only()
}

/// Inclusive bounds of the pixels matching `ink`.
fn ink_box(px: &PixelBuffer, ink: impl Fn(Rgba8) -> bool) -> (u32, u32, u32, u32) {
    let mut hits = Vec::new();
    for y in 0..px.height() {
        for x in 0..px.width() {
            if ink(px.pixel(x, y)) {
                hits.push((x, y));
            }
        }
    }
    assert!(!hits.is_empty());
    (
        hits.iter().map(|p| p.0).min().unwrap(),
        hits.iter().map(|p| p.1).min().unwrap(),
        hits.iter().map(|p| p.0).max().unwrap(),
        hits.iter().map(|p| p.1).max().unwrap(),
    )
}

fn decode(png: &[u8]) -> image::DynamicImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png).unwrap()
}

#[test]
fn classic_avatar_is_masked_solid_with_centered_initial() {
    let profile = offline(SynthesisProfile::classic());
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let (px, outcome) = synth.avatar_pixels(&ItemSpec::new("default")).unwrap();
    assert_eq!(outcome, GlyphOutcome::Drawn);
    assert_eq!((px.width(), px.height()), (200, 200));
    // Corners outside the circle are transparent.
    assert_eq!(px.pixel(0, 0).a, 0);
    assert_eq!(px.pixel(199, 199).a, 0);
    // md5("default") selects the third classic color.
    let blue = Rgb8::from_hex("#45B7D1").unwrap();
    assert_eq!(px.pixel(100, 5), blue.with_alpha(255));

    // The glyph is white and sits around the center, raised by the text nudge.
    let mut white = Vec::new();
    for y in 0..200 {
        for x in 0..200 {
            if px.pixel(x, y) == Rgba8::new(255, 255, 255, 255) {
                white.push((x, y));
            }
        }
    }
    assert!(!white.is_empty());
    let min_x = white.iter().map(|p| p.0).min().unwrap();
    let max_x = white.iter().map(|p| p.0).max().unwrap();
    let min_y = white.iter().map(|p| p.1).min().unwrap();
    let max_y = white.iter().map(|p| p.1).max().unwrap();
    assert_eq!(min_x + max_x + 1, 200);
    assert_eq!(min_y + max_y + 1, 200 - 2 * profile.avatar_nudges.text as u32);
}

#[test]
fn classic_placeholder_caption_sits_at_plain_center() {
    let profile = offline(SynthesisProfile::classic());
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let (px, outcome) = synth.placeholder_pixels(&catalog.placeholders[0]).unwrap();
    assert_eq!(outcome, GlyphOutcome::FellBack);
    let (x0, y0, x1, y1) = ink_box(&px, |p| p == Rgba8::new(255, 255, 255, 255));
    let ink_h = y1 - y0 + 1;
    assert_eq!(y0, (600 - ink_h) / 2);
    assert_eq!(x0 + x1 + 1, 400);
}

#[test]
fn pro_avatar_fallback_initials_are_not_raised() {
    let profile = offline(SynthesisProfile::pro());
    let mut catalog = Catalog::pro();
    let bg = Rgb8::new(20, 40, 60);
    catalog.avatar_palette = PaletteCatalog::new(vec![crate::palette::catalog::PaletteEntry {
        name: "flat".into(),
        scheme: ColorScheme::Solid { color: bg },
    }])
    .unwrap();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let item = ItemSpec::new("snake").with_glyph("🐍");
    let (px, outcome) = synth.avatar_pixels(&item).unwrap();
    assert_eq!(outcome, GlyphOutcome::FellBack);
    let (_, y0, _, y1) = ink_box(&px, |p| p.a == 255 && p.rgb() != bg);
    let ink_h = y1 - y0 + 1;
    assert_eq!(y0, (300 - ink_h) / 2);
}

#[test]
fn emoji_without_fonts_falls_back_to_initials() {
    let profile = offline(SynthesisProfile::pro());
    let catalog = Catalog::pro();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let item = ItemSpec::new("snake").with_glyph("🐍").with_palette_index(3);
    let (px, outcome) = synth.avatar_pixels(&item).unwrap();
    assert_eq!(outcome, GlyphOutcome::FellBack);
    assert!(outcome.is_degraded());
    assert_eq!((px.width(), px.height()), (300, 300));
    // Center is the inner radial stop of mint_fresh, unless covered by the fallback glyph.
    assert_eq!(px.pixel(150, 5).a, 255);
    assert_eq!(px.pixel(0, 0).a, 0);
}

#[test]
fn unrenderable_fallback_is_skipped_not_fatal() {
    let mut profile = offline(SynthesisProfile::classic());
    profile.text_chain = FontChain::new(Vec::new(), None);
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let (px, outcome) = synth.avatar_pixels(&ItemSpec::new("guest")).unwrap();
    assert_eq!(outcome, GlyphOutcome::Skipped);
    // Plain solid disc.
    let center = px.pixel(100, 100);
    assert_eq!(center, px.pixel(60, 100));
}

#[test]
fn classic_placeholder_is_opaque_two_stop_band() {
    let profile = offline(SynthesisProfile::classic());
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let item = &catalog.placeholders[0];
    let (px, outcome) = synth.placeholder_pixels(item).unwrap();
    // Emoji cannot be drawn offline; the caption text replaces it.
    assert_eq!(outcome, GlyphOutcome::FellBack);
    assert!(px.is_opaque());
    assert_eq!((px.width(), px.height()), (400, 600));
    assert_eq!(px.pixel(0, 0).rgb(), Rgb8::from_hex("#2E7D32").unwrap());
    assert_eq!(px.pixel(399, 599).rgb(), Rgb8::from_hex("#66BB6A").unwrap());
}

#[test]
fn pro_placeholder_draws_caption_below_center() {
    let profile = offline(SynthesisProfile::pro());
    let catalog = Catalog::pro();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let item = &catalog.placeholders[1];
    let (with_caption, outcome) = synth.placeholder_pixels(item).unwrap();
    assert_eq!(outcome, GlyphOutcome::Skipped);
    assert!(with_caption.is_opaque());

    let bare = ItemSpec::new(item.identifier()).with_palette_index(1);
    let (without, _) = synth.placeholder_pixels(&bare).unwrap();
    // Rows above the caption match; rows of the caption differ.
    let caption_row = 600 / 2 + 60 + 5;
    let above = 600 / 2 + 60 - 10;
    let row = |b: &PixelBuffer, y: u32| (0..400).map(|x| b.pixel(x, y)).collect::<Vec<_>>();
    assert_eq!(row(&with_caption, above), row(&without, above));
    assert_ne!(row(&with_caption, caption_row), row(&without, caption_row));
}

#[test]
fn texture_changes_the_base() {
    let profile = offline(SynthesisProfile::pro());
    let catalog = Catalog::pro();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let plain = ItemSpec::new("p").with_palette_index(0);
    let textured = plain.clone().with_texture(true);
    let (a, _) = synth.placeholder_pixels(&plain).unwrap();
    let (b, _) = synth.placeholder_pixels(&textured).unwrap();
    assert_ne!(a, b);
}

#[test]
fn synthesize_encodes_rgba_avatars_and_rgb_placeholders() {
    let profile = offline(SynthesisProfile::classic());
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);

    let avatar = synth
        .synthesize(ProductKind::Avatar, &ItemSpec::new("snake"))
        .unwrap();
    assert_eq!(avatar.file_name, "avatar_snake.png");
    let img = decode(&avatar.png);
    assert_eq!(img.color(), image::ColorType::Rgba8);
    assert_eq!((img.width(), img.height()), (200, 200));

    let placeholder = synth
        .synthesize(ProductKind::Placeholder, &catalog.placeholders[2])
        .unwrap();
    assert_eq!(placeholder.file_name, "placeholder_reptile_3.png");
    assert_eq!(decode(&placeholder.png).color(), image::ColorType::Rgb8);
}

#[test]
fn synthesis_is_deterministic() {
    let profile = offline(SynthesisProfile::pro());
    let catalog = Catalog::pro();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);
    let item = &catalog.avatars[4];
    let a = synth.synthesize(ProductKind::Avatar, item).unwrap();
    let b = synth.synthesize(ProductKind::Avatar, item).unwrap();
    assert_eq!(a.png, b.png);
}

#[test]
fn invalid_identifier_is_rejected() {
    let profile = offline(SynthesisProfile::classic());
    let catalog = Catalog::classic();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);
    let err = synth
        .synthesize(ProductKind::Avatar, &ItemSpec::new("../x"))
        .unwrap_err();
    assert!(matches!(err, ForgeError::Validation(_)));
}

#[test]
fn single_entry_palette_is_used_for_every_item() {
    let profile = offline(SynthesisProfile::classic());
    let mut catalog = Catalog::classic();
    catalog.avatar_palette = PaletteCatalog::new(vec![crate::palette::catalog::PaletteEntry {
        name: "ink".into(),
        scheme: ColorScheme::Solid {
            color: Rgb8::new(1, 2, 3),
        },
    }])
    .unwrap();
    let fonts = FontLibrary::new(Vec::new());
    let synth = Synthesizer::new(&profile, &catalog, &fonts);
    let (px, _) = synth.avatar_pixels(&ItemSpec::new("anyone")).unwrap();
    assert_eq!(px.pixel(100, 3), Rgba8::new(1, 2, 3, 255));
}
