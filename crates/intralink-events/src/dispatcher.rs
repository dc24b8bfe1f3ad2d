//! Visit dispatcher
//!
//! Holds subscriber callbacks keyed by event name and invokes them
//! synchronously in registration order. A failing subscriber never blocks
//! the rest, and nothing propagates back to the emitter.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use uuid::Uuid;

use crate::event::{VisitEvent, DOM_VISIT_EVENT, VISIT};
use crate::host::EventHost;

type Callback = Arc<dyn Fn(&VisitEvent) + Send + Sync>;
type Registry = RwLock<HashMap<String, Vec<Subscriber>>>;

#[derive(Clone)]
struct Subscriber {
    id: Uuid,
    callback: Callback,
}

/// Handle for removing a subscriber.
///
/// Dropping the handle does not unsubscribe; call [`Subscription::dispose`].
pub struct Subscription {
    id: Uuid,
    event: String,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Remove the subscriber. Safe to call more than once.
    pub fn dispose(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(subscribers) = registry.write().get_mut(&self.event) {
                subscribers.retain(|s| s.id != self.id);
            }
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

pub struct Dispatcher {
    registry: Arc<Registry>,
    host: Arc<dyn EventHost>,
}

impl Dispatcher {
    pub fn new(host: Arc<dyn EventHost>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
            host,
        }
    }

    /// Register a subscriber for `event`.
    ///
    /// Multiple subscribers per event are allowed and run in registration
    /// order. The returned handle removes exactly this subscriber.
    pub fn on<F>(&self, event: &str, callback: F) -> Subscription
    where
        F: Fn(&VisitEvent) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.registry
            .write()
            .entry(event.to_string())
            .or_default()
            .push(Subscriber {
                id,
                callback: Arc::new(callback),
            });

        Subscription {
            id,
            event: event.to_string(),
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Remove a subscriber by id. No-op if it was never registered.
    pub fn off(&self, event: &str, id: Uuid) {
        if let Some(subscribers) = self.registry.write().get_mut(event) {
            subscribers.retain(|s| s.id != id);
        }
    }

    /// Number of subscribers currently registered for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.registry.read().get(event).map_or(0, Vec::len)
    }

    /// Drop every subscriber.
    pub fn clear(&self) {
        self.registry.write().clear();
    }

    /// Invoke every subscriber of `event` with `payload`, in order.
    ///
    /// The registry is snapshotted before dispatch, so a callback may
    /// subscribe or dispose without deadlocking; additions take effect from
    /// the next emission. A panicking subscriber is logged and skipped.
    ///
    /// Emitting the reserved [`VISIT`] event additionally raises the native
    /// [`DOM_VISIT_EVENT`] on the host with the serialized payload as its
    /// detail, once per emission.
    pub fn emit(&self, event: &str, payload: &VisitEvent) {
        let snapshot: Vec<Subscriber> = self
            .registry
            .read()
            .get(event)
            .cloned()
            .unwrap_or_default();

        for subscriber in &snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| (subscriber.callback)(payload)));
            if outcome.is_err() {
                tracing::error!(
                    event,
                    subscriber_id = %subscriber.id,
                    "Subscriber panicked during dispatch"
                );
            }
        }

        if event == VISIT {
            match serde_json::to_value(payload) {
                Ok(detail) => self.host.emit_custom_event(DOM_VISIT_EVENT, detail),
                Err(e) => tracing::error!(error = %e, "Failed to serialize visit payload"),
            }
        }
    }
}

impl Clone for Dispatcher {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            host: Arc::clone(&self.host),
        }
    }
}
