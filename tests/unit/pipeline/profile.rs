use super::*;

#[test]
fn style_values_match_their_names() {
    use clap::ValueEnum as _;
    assert_eq!(Style::from_str("classic", false).unwrap(), Style::Classic);
    assert_eq!(Style::from_str("PRO", true).unwrap(), Style::Pro);
    assert!(Style::from_str("fancy", true).is_err());
    for style in Style::value_variants() {
        assert_eq!(style.to_possible_value().unwrap().get_name(), style.as_str());
    }
    assert_eq!(Style::default(), Style::Classic);
}

#[test]
fn classic_and_pro_canvas_sizes() {
    let classic = SynthesisProfile::classic();
    assert_eq!(classic.avatar_canvas, Canvas::square(200).unwrap());
    assert_eq!(classic.placeholder_canvas, Canvas::new(400, 600).unwrap());
    assert_eq!(classic.placeholder_layout, PlaceholderLayout::Centered);
    assert!(!classic.smooth_placeholders);

    let pro = SynthesisProfile::pro();
    assert_eq!(pro.avatar_canvas, Canvas::square(300).unwrap());
    assert_eq!(pro.placeholder_canvas, Canvas::new(400, 600).unwrap());
    assert_eq!(
        pro.placeholder_layout,
        PlaceholderLayout::Captioned {
            emoji_top: -100,
            caption_top: 60
        }
    );
    assert!(pro.smooth_placeholders);
    assert_eq!(pro.text_color.a, 230);
    assert_eq!(classic.text_color.a, 255);
}

#[test]
fn chains_end_in_builtin_except_emoji() {
    let p = SynthesisProfile::pro();
    assert_eq!(p.avatar_emoji_chain.builtin_size, None);
    assert_eq!(p.avatar_emoji_chain.descriptors[0].point_size, 150);
    assert_eq!(p.placeholder_emoji_chain.descriptors[0].point_size, 120);
    assert_eq!(p.text_chain.builtin_size, Some(TEXT_POINT_SIZE));
    assert_eq!(p.caption_chain.builtin_size, Some(CAPTION_POINT_SIZE));
}

#[test]
fn builtin_fonts_only_strips_files() {
    let p = SynthesisProfile::pro().builtin_fonts_only();
    assert!(p.avatar_emoji_chain.candidates().is_empty());
    assert_eq!(p.text_chain.candidates().len(), 1);
    assert_eq!(p.caption_chain.candidates().len(), 1);
    assert_eq!(p.avatar_nudges, SynthesisProfile::pro().avatar_nudges);
}

#[test]
fn baseline_nudges_apply_to_avatars_only() {
    let classic = SynthesisProfile::classic();
    assert_eq!(classic.avatar_nudges.text, TEXT_BASELINE_NUDGE);
    assert_eq!(classic.avatar_nudges.glyph, EMOJI_BASELINE_NUDGE);
    assert_eq!(classic.placeholder_nudges, Nudges::default());

    let pro = SynthesisProfile::pro();
    assert_eq!(pro.avatar_nudges.glyph, EMOJI_BASELINE_NUDGE);
    assert_eq!(pro.avatar_nudges.text, 0);
    assert_eq!(pro.placeholder_nudges, Nudges::default());
}
