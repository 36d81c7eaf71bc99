use super::geom::{LayoutRect, Pos, Rect};
use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Rounded,
}

struct BorderGlyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BorderKind {
    fn glyphs(self) -> BorderGlyphs {
        let (top_left, top_right, bottom_left, bottom_right) = match self {
            BorderKind::Plain => ("┌", "┐", "└", "┘"),
            BorderKind::Rounded => ("╭", "╮", "╰", "╯"),
        };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal: "─",
            vertical: "│",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        style: Style,
    },
    /// Text laid out from a signed origin; only graphemes fully inside `clip` are drawn.
    Text {
        x: i32,
        y: i32,
        text: String,
        style: Style,
        clip: Rect,
    },
    Border {
        rect: LayoutRect,
        style: Style,
        kind: BorderKind,
        clip: Rect,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>, style: Style, clip: Rect) {
        if clip.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            x,
            y,
            text: text.into(),
            style,
            clip,
        });
    }

    pub fn border(&mut self, rect: LayoutRect, style: Style, kind: BorderKind, clip: Rect) {
        if clip.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Border {
            rect,
            style,
            kind,
            clip,
        });
    }
}

/// A cell grid the paint commands can be rasterized onto.
///
/// `put` layers `style` over whatever style the cell already has.
pub trait Surface {
    fn area(&self) -> Rect;

    fn put(&mut self, pos: Pos, symbol: &str, style: Style);
}

pub fn rasterize<S: Surface + ?Sized>(cmds: &[PaintCmd], surface: &mut S) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill_rect(surface, *rect, *style),
            PaintCmd::Text {
                x,
                y,
                text,
                style,
                clip,
            } => draw_text(surface, *x, *y, text, *style, *clip),
            PaintCmd::Border {
                rect,
                style,
                kind,
                clip,
            } => draw_border(surface, *rect, *style, *kind, *clip),
        }
    }
}

fn fill_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, style: Style) {
    let rect = rect.intersect(surface.area());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            surface.put(Pos::new(x, y), " ", style);
        }
    }
}

fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    text: &str,
    style: Style,
    clip: Rect,
) {
    let clip = clip.intersect(surface.area());
    if clip.is_empty() || y < clip.y as i32 || y >= clip.bottom() as i32 {
        return;
    }
    let left = clip.x as i32;
    let right = clip.right() as i32;

    let mut cx = x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as i32;
        if w == 0 {
            continue;
        }
        if cx >= right {
            break;
        }
        // Wide glyphs cut by either clip edge are skipped entirely.
        if cx >= left && cx + w <= right {
            surface.put(Pos::new(cx as u16, y as u16), g, style);
            for dx in 1..w {
                surface.put(Pos::new((cx + dx) as u16, y as u16), " ", style);
            }
        }
        cx += w;
    }
}

fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    rect: LayoutRect,
    style: Style,
    kind: BorderKind,
    clip: Rect,
) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let visible = rect.clip(clip.intersect(surface.area()));
    if visible.is_empty() {
        return;
    }

    let g = kind.glyphs();
    let (left, right) = (rect.x, rect.right() - 1);
    let (top, bottom) = (rect.y, rect.bottom() - 1);

    for y in visible.y..visible.bottom() {
        let yi = y as i32;
        let edge_row = yi == top || yi == bottom;
        for x in visible.x..visible.right() {
            let xi = x as i32;
            let edge_col = xi == left || xi == right;
            let symbol = match (edge_col, edge_row) {
                (true, true) => match (xi == left, yi == top) {
                    (true, true) => g.top_left,
                    (false, true) => g.top_right,
                    (true, false) => g.bottom_left,
                    (false, false) => g.bottom_right,
                },
                (false, true) => g.horizontal,
                (true, false) => g.vertical,
                (false, false) => continue,
            };
            surface.put(Pos::new(x, y), symbol, style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
