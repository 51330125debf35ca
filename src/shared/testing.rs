//! Test doubles shared by the hook and component tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

use crate::shared::errors::Result;
use crate::shared::viewport::{ViewportSource, WidthCallback};

type Listeners = Rc<RefCell<Vec<(usize, WidthCallback)>>>;

/// In-memory viewport whose width is driven by the test.
/// Clones share the same width and listener list.
#[derive(Clone, Default)]
pub(crate) struct ManualViewport {
    width: Rc<Cell<f64>>,
    listeners: Listeners,
    next_id: Rc<Cell<usize>>,
}

pub(crate) struct ManualSubscription {
    id: usize,
    listeners: Listeners,
}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

impl ManualViewport {
    pub(crate) fn new(width: f64) -> Self {
        let viewport = Self::default();
        viewport.width.set(width);
        viewport
    }

    pub(crate) fn resize(&self, width: f64) {
        self.width.set(width);
        for (_, callback) in self.listeners.borrow_mut().iter_mut() {
            callback(width);
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ViewportSource for ManualViewport {
    type Subscription = ManualSubscription;

    fn width(&self) -> Option<f64> {
        Some(self.width.get())
    }

    fn subscribe(&self, on_change: WidthCallback) -> Result<ManualSubscription> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.listeners.borrow_mut().push((id, on_change));
        Ok(ManualSubscription {
            id,
            listeners: self.listeners.clone(),
        })
    }
}

/// Drive queued tasks, effects and dirty scopes until the dom is idle.
/// An effect reacting to a signal needs a task wakeup, an effect run and a
/// rerender, so a few passes are required.
pub(crate) fn settle(dom: &mut VirtualDom) {
    for _ in 0..6 {
        dom.render_immediate(&mut NoOpMutations);
    }
}
