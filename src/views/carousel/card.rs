use super::CarouselStyles;
use crate::models::CarouselItem;
use crate::ui::core::geom::{LayoutRect, Rect};
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Mod;
use crate::ui::core::text::{truncate, wrap};
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::Ui;

const TITLE_MAX_LINES: usize = 2;
/// Text starts this far inside the border.
const TEXT_INSET: i32 = 2;

pub(super) fn paint(
    ui: &mut Ui,
    index: usize,
    item: &CarouselItem,
    rect: LayoutRect,
    clip: Rect,
    hovered: bool,
    styles: &CarouselStyles,
) {
    let visible = rect.clip(clip);
    if visible.is_empty() {
        return;
    }

    ui.tree.push(Node::new(
        NodeKind::Card { index },
        visible,
        0,
        Sense::HOVER,
    ));

    ui.painter.fill_rect(visible, styles.card);
    let border = if hovered {
        styles.card_hover_border
    } else {
        styles.card_border
    };
    ui.painter.border(rect, border, BorderKind::Rounded, clip);

    if rect.w < 6 || rect.h < 4 {
        return;
    }

    let text_w = rect.w - (TEXT_INSET as u16) * 2;
    let text_x = rect.x + TEXT_INSET;
    let text_clip = LayoutRect::new(text_x, rect.y + 1, text_w, rect.h - 2).clip(clip);
    if text_clip.is_empty() {
        return;
    }

    // Last inner row is reserved for the image reference.
    let url_y = rect.bottom() - 2;
    let mut y = rect.y + 1;

    let category = item.category.to_uppercase();
    ui.painter.text(
        text_x,
        y,
        truncate(&category, text_w),
        styles.category.add_mod(Mod::BOLD),
        text_clip,
    );
    y += 1;

    for line in wrap(&item.title, text_w, TITLE_MAX_LINES) {
        if y >= url_y {
            break;
        }
        ui.painter
            .text(text_x, y, line, styles.title.add_mod(Mod::BOLD), text_clip);
        y += 1;
    }

    let description_lines = (url_y - y).max(0) as usize;
    for line in wrap(&item.description, text_w, description_lines) {
        ui.painter.text(text_x, y, line, styles.description, text_clip);
        y += 1;
    }

    if !item.url.is_empty() && url_y > rect.y + 1 {
        ui.painter.text(
            text_x,
            url_y,
            truncate(&item.url, text_w),
            styles.url,
            text_clip,
        );
    }
}
