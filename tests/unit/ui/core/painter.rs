use super::*;
use crate::ui::backend::test::TestBuffer;
use crate::ui::core::style::Color;

fn buffer(w: u16, h: u16) -> TestBuffer {
    TestBuffer::new(Rect::new(0, 0, w, h))
}

#[test]
fn painter_skips_invisible_commands_and_clears() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 0, 3), Style::default());
    p.text(0, 0, "hidden", Style::default(), Rect::new(0, 0, 0, 1));
    p.border(
        LayoutRect::new(0, 0, 4, 4),
        Style::default(),
        BorderKind::Plain,
        Rect::default(),
    );
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.text(0, 0, "hi", Style::default(), Rect::new(0, 0, 2, 1));
    assert_eq!(p.cmds().len(), 2);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn text_is_clipped_on_both_edges() {
    let mut p = Painter::new();
    p.text(0, 0, "abcdefgh", Style::default(), Rect::new(2, 0, 5, 1));

    let mut buf = buffer(10, 1);
    rasterize(p.cmds(), &mut buf);
    assert_eq!(buf.row_text(0), "  cdefg   ");
}

#[test]
fn wide_glyph_cut_by_clip_is_skipped() {
    let mut p = Painter::new();
    p.text(1, 0, "你好", Style::default(), Rect::new(2, 0, 4, 1));

    let mut buf = buffer(8, 1);
    rasterize(p.cmds(), &mut buf);
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(2, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(3, 0).unwrap().symbol, "好");
    assert_eq!(buf.cell(4, 0).unwrap().symbol, " ");
}

#[test]
fn text_outside_clip_rows_is_dropped() {
    let mut p = Painter::new();
    p.text(0, 1, "row", Style::default(), Rect::new(0, 0, 5, 1));

    let mut buf = buffer(5, 2);
    rasterize(p.cmds(), &mut buf);
    assert!(!buf.contains_text("row"));
}

#[test]
fn rounded_border_draws_perimeter() {
    let mut p = Painter::new();
    p.border(
        LayoutRect::new(0, 0, 4, 3),
        Style::default(),
        BorderKind::Rounded,
        Rect::new(0, 0, 4, 3),
    );

    let mut buf = buffer(4, 3);
    rasterize(p.cmds(), &mut buf);
    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "╰──╯");
}

#[test]
fn border_sliding_off_the_left_keeps_its_right_edge() {
    let mut p = Painter::new();
    p.border(
        LayoutRect::new(-2, 0, 4, 3),
        Style::default(),
        BorderKind::Plain,
        Rect::new(0, 0, 4, 3),
    );

    let mut buf = buffer(4, 3);
    rasterize(p.cmds(), &mut buf);
    assert_eq!(buf.row_text(0), "─┐  ");
    assert_eq!(buf.row_text(1), " │  ");
    assert_eq!(buf.row_text(2), "─┘  ");
}

#[test]
fn later_commands_layer_style_over_fill() {
    let bg = Style::default().bg(Color::Indexed(4));
    let fg = Style::default().fg(Color::Indexed(1));
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 3, 1), bg);
    p.text(0, 0, "x", fg, Rect::new(0, 0, 3, 1));

    let mut buf = buffer(3, 1);
    rasterize(p.cmds(), &mut buf);
    let cell = buf.cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "x");
    assert_eq!(cell.style.fg, Some(Color::Indexed(1)));
    assert_eq!(cell.style.bg, Some(Color::Indexed(4)));
    assert_eq!(buf.cell(1, 0).unwrap().style, bg);
}
