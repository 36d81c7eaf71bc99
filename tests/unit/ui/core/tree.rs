use super::*;

fn card(index: usize, rect: Rect) -> Node {
    Node::new(NodeKind::Card { index }, rect, 0, Sense::HOVER)
}

#[test]
fn hit_test_prefers_higher_layer_then_later_nodes() {
    let mut tree = UiTree::new();
    tree.push(Node::new(
        NodeKind::Container,
        Rect::new(0, 0, 20, 10),
        0,
        Sense::SCROLL,
    ));
    tree.push(card(0, Rect::new(0, 0, 10, 10)));
    tree.push(card(1, Rect::new(5, 0, 10, 10)));
    tree.push(Node::new(
        NodeKind::NavButton { side: Side::Left },
        Rect::new(0, 4, 3, 3),
        1,
        Sense::HOVER | Sense::CLICK,
    ));

    let hit = |x, y| tree.hit_test(Pos::new(x, y), Sense::HOVER).map(|n| n.kind);
    assert_eq!(hit(1, 5), Some(NodeKind::NavButton { side: Side::Left }));
    assert_eq!(hit(6, 0), Some(NodeKind::Card { index: 1 }));
    assert_eq!(hit(2, 0), Some(NodeKind::Card { index: 0 }));
    assert_eq!(hit(17, 0), None);

    let scroll = tree.hit_test(Pos::new(17, 0), Sense::SCROLL).map(|n| n.kind);
    assert_eq!(scroll, Some(NodeKind::Container));
}

#[test]
fn empty_nodes_are_not_registered() {
    let mut tree = UiTree::new();
    tree.push(card(0, Rect::new(3, 3, 0, 4)));
    assert!(tree.nodes().is_empty());
    assert!(tree.node(NodeKind::Card { index: 0 }).is_none());

    tree.push(card(0, Rect::new(3, 3, 2, 4)));
    assert_eq!(tree.nodes().len(), 1);
    tree.clear();
    assert!(tree.nodes().is_empty());
}
