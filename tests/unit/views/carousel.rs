use super::*;
use crate::models::sample_items;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;
use crate::ui::core::tree::UiTree;

struct Frame {
    backend: TestBackend,
    tree: UiTree,
}

fn render(w: u16, h: u16, configure: impl FnOnce(&mut CarouselView)) -> Frame {
    let items = sample_items();
    let heading = HeadingSettings::default();
    let config = CarouselConfig::TERMINAL;
    let mut view = CarouselView {
        items: &items,
        config: &config,
        heading: &heading,
        strip_offset: 0,
        left_hidden: 1.0,
        right_hidden: 0.0,
        hovered: None,
        styles: CarouselStyles::default(),
    };
    configure(&mut view);

    let mut backend = TestBackend::new(w, h);
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let area = backend.area();
    let mut ui = Ui::new(area, &mut painter, &mut tree);
    view.ui(&mut ui);
    backend.draw(area, painter.cmds());
    Frame { backend, tree }
}

fn card_indices(tree: &UiTree) -> Vec<usize> {
    tree.nodes()
        .iter()
        .filter_map(|n| match n.kind {
            NodeKind::Card { index } => Some(index),
            _ => None,
        })
        .collect()
}

#[test]
fn heading_is_painted_above_the_strip() {
    let frame = render(100, 20, |_| {});
    let row = frame.backend.buffer().row_text(1);
    assert!(row.contains("Everything. Yes, even that."));
}

#[test]
fn only_cards_overlapping_the_container_are_laid_out() {
    let frame = render(100, 20, |_| {});
    assert_eq!(card_indices(&frame.tree), vec![0, 1, 2]);

    // Content is centered at 90% of the padded width: x = 7.
    let first = frame.tree.node(NodeKind::Card { index: 0 }).unwrap();
    assert_eq!(first.rect, Rect::new(7, 3, 30, 12));
    let third = frame.tree.node(NodeKind::Card { index: 2 }).unwrap();
    assert_eq!(third.rect, Rect::new(71, 3, 29, 12));

    let buf = frame.backend.buffer();
    assert_eq!(buf.cell(7, 3).unwrap().symbol, "╭");
    assert!(buf.row_text(4).contains("MOUSE"));
}

#[test]
fn strip_offset_translates_cards_past_the_left_edge() {
    let frame = render(100, 20, |v| v.strip_offset = -32);
    assert_eq!(card_indices(&frame.tree), vec![0, 1, 2, 3]);

    let first = frame.tree.node(NodeKind::Card { index: 0 }).unwrap();
    assert_eq!(first.rect, Rect::new(0, 3, 5, 12));
    let second = frame.tree.node(NodeKind::Card { index: 1 }).unwrap();
    assert_eq!(second.rect.x, 7);
}

#[test]
fn hidden_button_slides_out_of_the_container() {
    let frame = render(100, 20, |_| {});
    assert!(frame
        .tree
        .node(NodeKind::NavButton { side: Side::Left })
        .is_none());

    let right = frame
        .tree
        .node(NodeKind::NavButton { side: Side::Right })
        .unwrap();
    assert_eq!(right.rect, Rect::new(97, 12, 3, 3));
    assert_eq!(frame.backend.buffer().cell(98, 13).unwrap().symbol, "›");

    let hit = frame.tree.hit_test(Pos::new(98, 13), Sense::CLICK);
    assert_eq!(hit.map(|n| n.kind), Some(right.kind));
}

#[test]
fn half_hidden_button_is_partially_visible() {
    let frame = render(100, 20, |v| v.left_hidden = 0.5);
    let left = frame
        .tree
        .node(NodeKind::NavButton { side: Side::Left })
        .unwrap();
    assert_eq!(left.rect, Rect::new(0, 12, 1, 3));
}

#[test]
fn hovered_button_widens_and_hovered_card_uses_hover_border() {
    let hover_border = Style::default().fg(Color::Indexed(5));
    let frame = render(100, 20, |v| {
        v.hovered = Some(NodeKind::Card { index: 1 });
        v.styles.card_hover_border = hover_border;
    });
    let buf = frame.backend.buffer();
    assert_eq!(buf.cell(39, 3).unwrap().style.fg, Some(Color::Indexed(5)));
    assert_eq!(buf.cell(7, 3).unwrap().style.fg, None);

    let frame = render(100, 20, |v| {
        v.hovered = Some(NodeKind::NavButton { side: Side::Right })
    });
    let right = frame
        .tree
        .node(NodeKind::NavButton { side: Side::Right })
        .unwrap();
    assert_eq!(right.rect, Rect::new(96, 12, 4, 3));
}

#[test]
fn narrow_container_uses_full_padded_width() {
    let frame = render(40, 16, |_| {});
    let first = frame.tree.node(NodeKind::Card { index: 0 }).unwrap();
    assert_eq!(first.rect.x, 2);
}

#[test]
fn tiny_area_paints_without_cards() {
    let frame = render(4, 2, |_| {});
    assert!(card_indices(&frame.tree).is_empty());
}
