use super::*;

#[test]
fn card_style_offsets_differ_across_cards() {
    let a = card_style(0, (30.0, 70.0));
    let b = card_style(1, (30.0, 70.0));
    assert_ne!(a, b);
}

#[test]
fn card_style_offset_is_bounded_by_the_float_amplitude() {
    for index in 0..FEATURES.len() {
        let offset = hero_math::feature_float_offset(85.0, 15.0, index);
        assert!(offset.abs() <= hero_math::FEATURE_FLOAT_AMPLITUDE_PX);
        assert!(card_style(index, (85.0, 15.0)).starts_with("transform: translateY("));
    }
}
