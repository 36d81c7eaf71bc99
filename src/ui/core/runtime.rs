use super::geom::Pos;
use super::input::{ScrollDir, UiEvent};
use super::tree::{NodeKind, Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Debug, Clone, Default)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

/// Pointer state machine: turns raw mouse events into hover/click/scroll
/// events against the hit-test tree of the last painted frame.
#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<NodeKind>,
    pressed: Option<NodeKind>,
    last_pos: Option<Pos>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<NodeKind> {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    /// Re-resolve hover after the tree changed under a stationary pointer
    /// (e.g. a card slid beneath it).
    pub fn refresh_hover(&mut self, tree: &UiTree) -> bool {
        let Some(pos) = self.last_pos else {
            return false;
        };
        let next = tree.hit_test(pos, Sense::HOVER).map(|n| n.kind);
        if next == self.hovered {
            return false;
        }
        self.hovered = next;
        true
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::default();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);
        self.last_pos = Some(pos);

        let next_hover = tree.hit_test(pos, Sense::HOVER).map(|n| n.kind);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = tree.hit_test(pos, Sense::CLICK).map(|n| n.kind);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                let released = tree.hit_test(pos, Sense::CLICK).map(|n| n.kind);
                // A click needs press and release on the same node.
                if let Some(target) = pressed.filter(|p| Some(*p) == released) {
                    out.events.push(UiEvent::Click { target, pos });
                }
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                let dir = if me.kind == MouseEventKind::ScrollLeft {
                    ScrollDir::Left
                } else {
                    ScrollDir::Right
                };
                if let Some(node) = tree.hit_test(pos, Sense::SCROLL) {
                    out.events.push(UiEvent::Scroll {
                        target: node.kind,
                        dir,
                        pos,
                    });
                }
            }
            MouseEventKind::Down(_)
            | MouseEventKind::Up(_)
            | MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
