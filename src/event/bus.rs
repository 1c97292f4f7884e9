use std::cell::RefCell;
use std::rc::Rc;

use super::{EventHandler, SketchEvent};
use crate::state::SketchState;

struct Subscription {
    event: SketchEvent,
    handler: Rc<RefCell<dyn EventHandler>>,
}

/// Routes each published event to the handlers subscribed to it
pub struct EventBus {
    subscriptions: RefCell<Vec<Subscription>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "subscriptions",
                &format!("<{} subscriptions>", self.subscriptions.borrow().len()),
            )
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to one event. A handler subscribed to several
    /// events is called once per matching publish.
    pub fn subscribe(&self, event: SketchEvent, handler: Rc<RefCell<dyn EventHandler>>) {
        self.subscriptions
            .borrow_mut()
            .push(Subscription { event, handler });
    }

    /// Calls every handler subscribed to `event`, in subscription order
    pub fn publish(&self, event: SketchEvent, state: &SketchState) {
        for subscription in self.subscriptions.borrow().iter() {
            if subscription.event != event {
                continue;
            }
            match subscription.handler.try_borrow_mut() {
                Ok(mut handler) => handler.handle_event(event, state),
                Err(_) => log::warn!("Skipping re-entrant {:?} handler", event),
            }
        }
    }

    pub fn subscriber_count(&self, event: SketchEvent) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|subscription| subscription.event == event)
            .count()
    }
}
