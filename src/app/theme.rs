//! UI 主题：轮播的颜色集中在这里，渲染代码只引用语义字段。

use crate::kernel::services::ports::ThemeSettings;
use crate::ui::core::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub heading_fg: Color,
    pub subtitle_fg: Color,
    pub card_bg: Color,
    pub card_border: Color,
    pub card_hover_border: Color,
    pub category_fg: Color,
    pub title_fg: Color,
    pub description_fg: Color,
    pub url_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_hover_bg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            heading_fg: Color::Indexed(15),               // White
            subtitle_fg: Color::Rgb(0x71, 0x80, 0x96),    // Slate gray
            card_bg: Color::Rgb(0x1a, 0x1d, 0x24),
            card_border: Color::Rgb(0x3a, 0x3f, 0x4b),
            card_hover_border: Color::Rgb(0x9f, 0x7a, 0xea),
            category_fg: Color::Rgb(0x9f, 0x7a, 0xea),    // Purple
            title_fg: Color::Indexed(15),
            description_fg: Color::Rgb(0x71, 0x80, 0x96),
            url_fg: Color::Indexed(8),                    // DarkGray
            button_bg: Color::Rgb(0x48, 0x4b, 0x50),
            button_fg: Color::Indexed(15),
            button_hover_bg: Color::Rgb(0x60, 0x64, 0x6b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("CAROUSEL_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    let direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if direct(&colorterm) || direct(&term) {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl UiTheme {
    fn colors_mut(&mut self) -> [&mut Color; 12] {
        [
            &mut self.heading_fg,
            &mut self.subtitle_fg,
            &mut self.card_bg,
            &mut self.card_border,
            &mut self.card_hover_border,
            &mut self.category_fg,
            &mut self.title_fg,
            &mut self.description_fg,
            &mut self.url_fg,
            &mut self.button_bg,
            &mut self.button_fg,
            &mut self.button_hover_bg,
        ]
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Override colors from settings; unparsable values keep the current color.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            &settings.heading_fg,
            &settings.subtitle_fg,
            &settings.card_bg,
            &settings.card_border,
            &settings.card_hover_border,
            &settings.category_fg,
            &settings.title_fg,
            &settings.description_fg,
            &settings.url_fg,
            &settings.button_bg,
            &settings.button_fg,
            &settings.button_hover_bg,
        ];
        for (slot, value) in self.colors_mut().into_iter().zip(overrides) {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "unknown theme color"),
            }
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let index = match v.to_ascii_lowercase().as_str() {
        "reset" => return Some(Color::Reset),
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "gray" | "grey" => 7,
        "dark_gray" | "darkgrey" => 8,
        "light_red" => 9,
        "light_green" => 10,
        "light_yellow" => 11,
        "light_blue" => 12,
        "light_magenta" => 13,
        "light_cyan" => 14,
        "white" => 15,
        _ => return None,
    };
    Some(Color::Indexed(index))
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, c) | (_, c @ Color::Reset) => c,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi256(r, g, b))
        }
        (TerminalColorSupport::Ansi256, c @ Color::Indexed(_)) => c,
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi16((r, g, b)))
        }
        (TerminalColorSupport::Ansi16, c @ Color::Indexed(0..=15)) => c,
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            Color::Indexed(nearest_ansi16(ansi256_to_rgb(i)))
        }
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Closest entry among the 6x6x6 cube and the 24-step gray ramp.
fn nearest_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| {
        (0..CUBE_LEVELS.len())
            .min_by_key(|&i| (CUBE_LEVELS[i] as i32 - c as i32).abs())
            .unwrap_or(0) as u8
    };
    let (ri, gi, bi) = (level(r), level(g), level(b));
    let cube_index = 16 + 36 * ri + 6 * gi + bi;
    let cube_rgb = (
        CUBE_LEVELS[ri as usize],
        CUBE_LEVELS[gi as usize],
        CUBE_LEVELS[bi as usize],
    );

    let avg = (r as u32 + g as u32 + b as u32) / 3;
    let step = ((avg.saturating_sub(8) + 5) / 10).min(23) as u8;
    let gray_index = 232 + step;
    let gray = 8 + step * 10;

    if distance_sq((r, g, b), (gray, gray, gray)) < distance_sq((r, g, b), cube_rgb) {
        gray_index
    } else {
        cube_index
    }
}

fn nearest_ansi16(rgb: (u8, u8, u8)) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|&(_, &p)| distance_sq(rgb, p))
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16_RGB[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
