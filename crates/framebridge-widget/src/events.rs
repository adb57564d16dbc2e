//! Explicit event subscription in place of ambient global listeners.
//!
//! The host environment (or a test harness) owns an [`EventHub`] standing in
//! for the window object. Listeners are attached with [`EventHub::subscribe`]
//! and detached deterministically by dropping the returned [`Subscription`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;

/// A window-level event relevant to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// A message arrived on the shared cross-frame channel.
    Message(Value),
    /// The frame finished loading.
    Load,
    /// The frame was resized.
    Resize,
}

type Handler = Box<dyn FnMut(&WindowEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    // Ids detached while a dispatch was in flight; purged after dispatch.
    detached_in_flight: Vec<u64>,
}

/// Single-threaded event dispatcher.
///
/// Handlers run synchronously, in subscription order. Dispatch is atomic with
/// respect to everything else in the frame: there is no preemption and no
/// concurrent delivery.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler. It stays attached until the returned
    /// [`Subscription`] is dropped (or leaked via [`Subscription::forget`]).
    pub fn subscribe(&self, handler: impl FnMut(&WindowEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Box::new(handler)));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Dispatch one event to every attached handler.
    pub fn emit(&self, event: &WindowEvent) {
        // Handlers are moved out for the duration of the dispatch so they may
        // subscribe or unsubscribe without re-borrowing the registry.
        let mut handlers = std::mem::take(&mut self.registry.borrow_mut().handlers);
        for (_, handler) in &mut handlers {
            handler(event);
        }

        let mut registry = self.registry.borrow_mut();
        let added = std::mem::take(&mut registry.handlers);
        registry.handlers = handlers;
        registry.handlers.extend(added);
        if !registry.detached_in_flight.is_empty() {
            let detached = std::mem::take(&mut registry.detached_in_flight);
            registry.handlers.retain(|(id, _)| !detached.contains(id));
        }
    }

    /// Number of currently attached handlers.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Disposer handle for an attached event handler.
///
/// Dropping the subscription detaches the handler. Outlives of the hub are
/// harmless: detaching against a dropped hub is a no-op.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// Leak the subscription, keeping the handler attached for the lifetime
    /// of the hub. Matches frame-lifetime listeners that are never removed.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            let before = registry.handlers.len();
            registry.handlers.retain(|(id, _)| *id != self.id);
            if registry.handlers.len() == before {
                // Handler is out on loan to a dispatch in flight.
                registry.detached_in_flight.push(self.id);
            }
        }
    }
}
