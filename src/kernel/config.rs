//! Carousel geometry constants, lifted out of the widget so the offset logic
//! can be driven (and tested) without any renderer.

use serde::{Deserialize, Serialize};

/// Container widths at which more cards count as visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: u32,
    pub lg: u32,
}

impl Breakpoints {
    pub const PIXELS: Self = Self { sm: 640, lg: 1024 };
    pub const CELLS: Self = Self { sm: 64, lg: 102 };

    /// Number of cards treated as visible for right-bound purposes.
    ///
    /// Both thresholds are exclusive: a width equal to `sm` still shows one card.
    pub fn visible_buffer(&self, width: u32) -> usize {
        if width > self.lg {
            3
        } else if width > self.sm {
            2
        } else {
            1
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::PIXELS
    }
}

/// Card geometry in layout units.
///
/// The defaults are pixel values (350x350 cards, 20 apart, breakpoints at 640
/// and 1024). [`CarouselConfig::TERMINAL`] keeps the proportions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub card_width: u32,
    pub card_height: u32,
    pub margin: u32,
    pub breakpoints: Breakpoints,
}

impl CarouselConfig {
    pub const PIXELS: Self = Self {
        card_width: 350,
        card_height: 350,
        margin: 20,
        breakpoints: Breakpoints::PIXELS,
    };

    pub const TERMINAL: Self = Self {
        card_width: 30,
        card_height: 12,
        margin: 2,
        breakpoints: Breakpoints::CELLS,
    };

    /// Largest stride the signed offset can step by.
    pub const MAX_STRIDE: u32 = i32::MAX as u32;

    /// Distance the strip moves per navigation step.
    pub const fn stride(&self) -> u32 {
        self.card_width.saturating_add(self.margin)
    }

    /// Clamp geometry read from user settings so `stride() <= MAX_STRIDE`.
    ///
    /// `card_width` wins over `margin` when the two together would overflow.
    pub fn sanitized(self) -> Self {
        let card_width = self.card_width.min(Self::MAX_STRIDE);
        let margin = self.margin.min(Self::MAX_STRIDE - card_width);
        if card_width != self.card_width || margin != self.margin {
            tracing::warn!(
                card_width = self.card_width,
                margin = self.margin,
                "carousel geometry too large, clamped"
            );
        }
        Self {
            card_width,
            margin,
            ..self
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::PIXELS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config.rs"]
mod tests;
