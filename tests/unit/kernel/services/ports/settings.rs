use super::*;

#[test]
fn unset_theme_colors_are_not_serialized() {
    let theme = ThemeSettings {
        card_border: Some("#3a3f4b".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&theme).unwrap();
    assert_eq!(json, r##"{"card_border":"#3a3f4b"}"##);
}

#[test]
fn empty_object_is_default_settings() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.carousel, CarouselConfig::TERMINAL);
}

#[test]
fn partial_carousel_section_fills_from_terminal_preset() {
    let settings: Settings =
        serde_json::from_str(r#"{"carousel": {"card_width": 24, "breakpoints": {"lg": 90}}}"#)
            .unwrap();
    assert_eq!(settings.carousel.card_width, 24);
    assert_eq!(settings.carousel.margin, CarouselConfig::TERMINAL.margin);
    assert_eq!(settings.carousel.breakpoints.sm, 64);
    assert_eq!(settings.carousel.breakpoints.lg, 90);
}

#[test]
fn malformed_carousel_section_is_an_error() {
    assert!(serde_json::from_str::<Settings>(r#"{"carousel": {"margin": "wide"}}"#).is_err());
}

#[test]
fn frame_interval_is_never_zero() {
    let animation = AnimationSettings {
        frame_interval_ms: 0,
        ..Default::default()
    };
    assert_eq!(animation.frame_interval(), Duration::from_millis(1));
}

#[test]
fn oversized_carousel_geometry_is_clamped_on_load() {
    let settings: Settings =
        serde_json::from_str(r#"{"carousel": {"card_width": 4294967295, "margin": 1}}"#).unwrap();
    assert_eq!(settings.carousel.stride(), CarouselConfig::MAX_STRIDE);
    let carousel = crate::kernel::carousel::Carousel::new(settings.carousel, 10);
    assert_eq!(carousel.stride(), i32::MAX);
}
