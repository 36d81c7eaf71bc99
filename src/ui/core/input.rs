use super::geom::Pos;
use super::tree::NodeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDir {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<NodeKind>,
        to: Option<NodeKind>,
        pos: Pos,
    },
    Click {
        target: NodeKind,
        pos: Pos,
    },
    Scroll {
        target: NodeKind,
        dir: ScrollDir,
        pos: Pos,
    },
}
