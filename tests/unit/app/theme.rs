use super::*;
use TerminalColorSupport::{Ansi16, Ansi256};

fn map(color: Color, support: TerminalColorSupport) -> Color {
    map_color_for_support(color, support)
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#9f7aea"), Some(Color::Rgb(0x9f, 0x7a, 0xea)));
    assert_eq!(parse_color(" Cyan "), Some(Color::Indexed(6)));
    assert_eq!(parse_color("dark_gray"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#gg0000"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn settings_override_only_parsable_colors() {
    let mut theme = UiTheme::default();
    let settings = ThemeSettings {
        category_fg: Some("#ff0000".to_string()),
        button_bg: Some("not-a-color".to_string()),
        ..Default::default()
    };
    theme.apply_settings(&settings);

    assert_eq!(theme.category_fg, Color::Rgb(0xff, 0, 0));
    assert_eq!(theme.button_bg, UiTheme::default().button_bg);
    assert_eq!(theme.title_fg, UiTheme::default().title_fg);
}

#[test]
fn ansi256_fallback_picks_cube_or_gray_ramp() {
    assert_eq!(map(Color::Rgb(255, 0, 0), Ansi256), Color::Indexed(196));
    assert_eq!(map(Color::Rgb(128, 128, 128), Ansi256), Color::Indexed(244));
    assert_eq!(map(Color::Indexed(42), Ansi256), Color::Indexed(42));
}

#[test]
fn ansi16_fallback_maps_extended_indices_down() {
    assert_eq!(map(Color::Rgb(250, 5, 5), Ansi16), Color::Indexed(9));
    assert_eq!(map(Color::Indexed(200), Ansi16), Color::Indexed(13));
    assert_eq!(map(Color::Indexed(4), Ansi16), Color::Indexed(4));
    assert_eq!(map(Color::Reset, Ansi16), Color::Reset);
}

#[test]
fn color_support_leaves_no_rgb_behind() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi16);
    for color in theme.colors_mut() {
        assert!(matches!(*color, Color::Indexed(0..=15) | Color::Reset));
    }

    let mut truecolor = UiTheme::default();
    truecolor.apply_color_support(TerminalColorSupport::TrueColor);
    assert_eq!(truecolor, UiTheme::default());
}
