//! Layout measurer: tracks the width of the carousel container and pushes
//! changes to subscribers.

use crate::ui::core::geom::Rect;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(u32)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Observes the container rectangle on every layout pass.
///
/// Listeners run synchronously inside [`LayoutMeasurer::observe`] and must not
/// subscribe or unsubscribe from within the callback.
#[derive(Default)]
pub struct LayoutMeasurer {
    width: Option<u32>,
    listeners: Rc<RefCell<Listeners>>,
}

impl LayoutMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last measured width; `None` before the container was laid out.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Feed the container rectangle of the current frame.
    ///
    /// Returns the new width when it changed since the last observation.
    pub fn observe(&mut self, rect: Rect) -> Option<u32> {
        let width = rect.w as u32;
        if self.width == Some(width) {
            return None;
        }
        self.width = Some(width);
        for (_, listener) in self.listeners.borrow_mut().entries.iter_mut() {
            listener(width);
        }
        Some(width)
    }

    /// Register a resize listener; it stays registered while the returned
    /// [`Subscription`] is alive.
    pub fn subscribe(&self, listener: impl FnMut(u32) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Unregisters its listener on drop.
#[must_use = "dropping a Subscription immediately unregisters the listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The measurer may already be gone; nothing to release then.
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        listeners
            .borrow_mut()
            .entries
            .retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/measure.rs"]
mod tests;
