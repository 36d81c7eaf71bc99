//! Offset controller: one bounded offset, two gated transitions.

use super::config::CarouselConfig;

/// Mutable part of the carousel.
///
/// `offset` is non-positive and a multiple of the stride; `container_width` is
/// `None` until the first measurement and then counts as width 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub offset: i32,
    pub container_width: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    ShiftLeft,
    ShiftRight,
    Resize { width: u32 },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    item_count: usize,
    state: CarouselState,
}

impl Carousel {
    pub fn new(config: CarouselConfig, item_count: usize) -> Self {
        Self {
            config: config.sanitized(),
            item_count,
            state: CarouselState::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn offset(&self) -> i32 {
        self.state.offset
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn stride(&self) -> i32 {
        i32::try_from(self.config.stride()).unwrap_or(i32::MAX)
    }

    pub fn visible_buffer(&self) -> usize {
        self.config
            .breakpoints
            .visible_buffer(self.state.container_width.unwrap_or(0))
    }

    /// `stride * (item_count - buffer)`; negative when every card already fits.
    fn right_bound(&self) -> i64 {
        let cards = self.item_count as i64 - self.visible_buffer() as i64;
        (self.stride() as i64).saturating_mul(cards)
    }

    /// Deepest reachable offset (as a non-negative distance).
    pub fn max_scroll(&self) -> i64 {
        self.right_bound().max(0)
    }

    pub fn can_shift_left(&self) -> bool {
        self.state.offset < 0
    }

    pub fn can_shift_right(&self) -> bool {
        (self.state.offset as i64).abs() < self.right_bound()
    }

    /// Index of the card currently at the left edge.
    pub fn first_visible(&self) -> usize {
        let stride = self.stride();
        if stride == 0 {
            return 0;
        }
        (-(self.state.offset as i64) / stride as i64) as usize
    }

    pub fn shift_left(&mut self) -> bool {
        if !self.can_shift_left() {
            return false;
        }
        self.state.offset = self.state.offset.saturating_add(self.stride());
        tracing::debug!(offset = self.state.offset, "carousel shifted left");
        true
    }

    pub fn shift_right(&mut self) -> bool {
        if !self.can_shift_right() {
            return false;
        }
        self.state.offset = self.state.offset.saturating_sub(self.stride());
        tracing::debug!(offset = self.state.offset, "carousel shifted right");
        true
    }

    /// Record a new container width.
    ///
    /// A wider container shows more cards, which pulls the right bound in; the
    /// offset is clamped (by whole strides) so it never points past it.
    pub fn set_container_width(&mut self, width: u32) -> bool {
        if self.state.container_width == Some(width) {
            return false;
        }
        self.state.container_width = Some(width);
        self.clamp_offset();
        tracing::debug!(
            width,
            buffer = self.visible_buffer(),
            offset = self.state.offset,
            "carousel container resized"
        );
        true
    }

    /// Swap geometry while keeping the same card at the left edge.
    pub fn reconfigure(&mut self, config: CarouselConfig) -> bool {
        let config = config.sanitized();
        if config == self.config {
            return false;
        }
        let first = self.first_visible() as i64;
        self.config = config;
        let offset = -first.saturating_mul(self.stride() as i64);
        self.state.offset = offset.max(i32::MIN as i64) as i32;
        self.clamp_offset();
        true
    }

    pub fn dispatch(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::ShiftLeft => self.shift_left(),
            CarouselAction::ShiftRight => self.shift_right(),
            CarouselAction::Resize { width } => self.set_container_width(width),
        }
    }

    fn clamp_offset(&mut self) {
        let floor = -self.max_scroll();
        if (self.state.offset as i64) < floor {
            self.state.offset = floor.max(i32::MIN as i64) as i32;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/carousel.rs"]
mod tests;
