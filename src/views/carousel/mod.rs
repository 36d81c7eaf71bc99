//! Testimonial carousel widget.
//!
//! Paints the heading, the card strip translated by the (animated) offset, and
//! the two navigation buttons. Everything is clipped to the container, so cards
//! and hidden buttons slide out past its edges instead of leaving the layout.

mod button;
mod card;

use crate::kernel::config::CarouselConfig;
use crate::kernel::services::ports::HeadingSettings;
use crate::models::CarouselItem;
use crate::ui::core::geom::{LayoutRect, Rect};
use crate::ui::core::layout::Insets;
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense, Side};
use crate::ui::core::widget::{Ui, Widget};

pub(crate) const CONTAINER_PADDING: Insets = Insets::xy(2, 1);
/// Share of the container width the card column uses above the small breakpoint.
const CONTENT_WIDTH_PERCENT: u16 = 90;
/// Gap between the heading and the strip.
const HEADING_GAP: u16 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselStyles {
    pub heading: Style,
    pub subtitle: Style,
    pub card: Style,
    pub card_border: Style,
    pub card_hover_border: Style,
    pub category: Style,
    pub title: Style,
    pub description: Style,
    pub url: Style,
    pub button: Style,
    pub button_hover: Style,
}

pub struct CarouselView<'a> {
    pub items: &'a [CarouselItem],
    pub config: &'a CarouselConfig,
    pub heading: &'a HeadingSettings,
    /// Current (possibly mid-animation) strip translation.
    pub strip_offset: i32,
    /// How far each button has slid out, 0.0 (shown) to 1.0 (hidden).
    pub left_hidden: f64,
    pub right_hidden: f64,
    pub hovered: Option<NodeKind>,
    pub styles: CarouselStyles,
}

impl Widget for CarouselView<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let container = ui.rect;
        if container.is_empty() {
            return;
        }

        ui.tree.push(Node::new(
            NodeKind::Container,
            container,
            0,
            Sense::SCROLL,
        ));

        let inner = container.inset(CONTAINER_PADDING);
        let content = if container.w as u32 > self.config.breakpoints.sm {
            inner.center_width_percent(CONTENT_WIDTH_PERCENT)
        } else {
            inner
        };

        let (heading_row, rest) = content.split_top(1);
        self.paint_heading(ui, heading_row);
        let (_, content) = rest.split_top(HEADING_GAP);

        let card_h = (self.config.card_height.min(u16::MAX as u32) as u16).min(content.h);
        if card_h > 0 {
            let stride = i32::try_from(self.config.stride()).unwrap_or(i32::MAX);
            let card_w = self.config.card_width.min(u16::MAX as u32) as u16;
            for (index, item) in self.items.iter().enumerate() {
                let x = (content.x as i32)
                    .saturating_add(self.strip_offset)
                    .saturating_add(stride.saturating_mul(index as i32));
                let rect = LayoutRect::new(x, content.y as i32, card_w, card_h);
                if rect.right() <= container.x as i32 || rect.x >= container.right() as i32 {
                    continue;
                }
                let hovered = self.hovered == Some(NodeKind::Card { index });
                card::paint(ui, index, item, rect, container, hovered, &self.styles);
            }
        }

        for (side, hidden) in [
            (Side::Left, self.left_hidden),
            (Side::Right, self.right_hidden),
        ] {
            let hovered = self.hovered == Some(NodeKind::NavButton { side });
            button::paint(ui, side, hidden, container, hovered, &self.styles);
        }
    }
}

impl CarouselView<'_> {
    fn paint_heading(&self, ui: &mut Ui, row: Rect) {
        if row.is_empty() {
            return;
        }
        let x = row.x as i32;
        let y = row.y as i32;
        ui.painter
            .text(x, y, self.heading.title.as_str(), self.styles.heading, row);
        if self.heading.subtitle.is_empty() {
            return;
        }
        let title_w = unicode_width::UnicodeWidthStr::width(self.heading.title.as_str()) as i32;
        ui.painter.text(
            x + title_w + 1,
            y,
            self.heading.subtitle.as_str(),
            self.styles.subtitle,
            row,
        );
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/carousel.rs"]
mod tests;
