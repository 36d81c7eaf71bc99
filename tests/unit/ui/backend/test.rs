use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

#[test]
fn draw_starts_each_frame_blank() {
    let mut backend = TestBackend::new(6, 2);
    let mut p = Painter::new();
    p.text(0, 0, "first", Style::default(), backend.area());
    backend.draw(backend.area(), p.cmds());
    assert!(backend.buffer().contains_text("first"));

    p.clear();
    p.text(0, 1, "next", Style::default(), backend.area());
    backend.draw(backend.area(), p.cmds());
    assert!(!backend.buffer().contains_text("first"));
    assert_eq!(backend.buffer().row_text(1), "next  ");
}

#[test]
fn put_outside_area_is_ignored() {
    let mut buf = TestBuffer::new(Rect::new(2, 2, 3, 1));
    buf.put(Pos::new(0, 0), "x", Style::default());
    buf.put(Pos::new(2, 2), "y", Style::default().fg(Color::Indexed(3)));

    assert!(buf.cell(0, 0).is_none());
    assert_eq!(buf.row_text(2), "y  ");
    assert_eq!(buf.cell(2, 2).unwrap().style.fg, Some(Color::Indexed(3)));
}
