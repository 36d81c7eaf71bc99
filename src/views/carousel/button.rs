use super::CarouselStyles;
use crate::ui::core::geom::{LayoutRect, Rect};
use crate::ui::core::tree::{Node, NodeKind, Sense, Side};
use crate::ui::core::widget::Ui;

const HEIGHT: u16 = 3;
const WIDTH: u16 = 3;
/// Hovering pads the button out by one column on its inner side.
const HOVER_WIDTH: u16 = 4;
/// Vertical anchor, in percent of the container height.
const TOP_PERCENT: u32 = 60;

/// Paint one navigation button, translated `hidden` of its width past its
/// container edge.
pub(super) fn paint(
    ui: &mut Ui,
    side: Side,
    hidden: f64,
    container: Rect,
    hovered: bool,
    styles: &CarouselStyles,
) {
    if container.w < WIDTH || container.h < HEIGHT {
        return;
    }

    let w = if hovered { HOVER_WIDTH } else { WIDTH };
    let slide = (hidden.clamp(0.0, 1.0) * w as f64).round() as i32;
    let top = container.y as u32 + container.h as u32 * TOP_PERCENT / 100;
    let y = top.min(container.bottom() as u32 - HEIGHT as u32) as i32;

    let (x, glyph, glyph_dx) = match side {
        Side::Left => (container.x as i32 - slide, "‹", 1),
        Side::Right => (container.right() as i32 - w as i32 + slide, "›", w as i32 - 2),
    };

    let rect = LayoutRect::new(x, y, w, HEIGHT);
    let visible = rect.clip(container);
    if visible.is_empty() {
        return;
    }

    ui.tree.push(Node::new(
        NodeKind::NavButton { side },
        visible,
        1,
        Sense::HOVER | Sense::CLICK,
    ));

    let style = if hovered {
        styles.button_hover
    } else {
        styles.button
    };
    ui.painter.fill_rect(visible, style);
    ui.painter
        .text(x + glyph_dx, y + 1, glyph, style, visible);
}
