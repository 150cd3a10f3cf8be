//! Host input fan-out with scoped listener lifetimes.
//!
//! Key and click listeners are process-wide for the life of a session.
//! Registration returns a guard; dropping it deregisters the listener, so
//! teardown releases every listener on any exit path and nothing fires
//! after disposal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// One input event from the host's event system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Discrete activate (primary click). No payload.
    Click,
}

type Listener = Box<dyn FnMut(&InputEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-threaded input event bus shared between host and sessions.
///
/// Listeners must not bind or unbind from inside a callback; events and
/// frames share one logical thread, so there is never a concurrent emit.
#[derive(Clone, Default)]
pub struct InputBus {
    inner: Rc<RefCell<Registry>>,
}

impl InputBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; dropping the returned guard deregisters it.
    #[must_use]
    pub fn bind(&self, listener: Listener) -> ListenerGuard {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, listener));
        ListenerGuard {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver one event to every live listener, in bind order.
    pub fn emit(&self, ev: &InputEvent) {
        let mut reg = self.inner.borrow_mut();
        for (_, listener) in &mut reg.listeners {
            listener(ev);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Removes its listener from the bus on drop.
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
