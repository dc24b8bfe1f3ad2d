//! Intralink Event Dispatch
//!
//! Subscriber registry keyed by event name, emitted synchronously in
//! registration order, with a bridge into the host page's native custom
//! events for the reserved visit notification.

mod dispatcher;
mod event;
mod host;

pub use dispatcher::{Dispatcher, Subscription};
pub use event::{VisitEvent, VisitOrigin, DOM_VISIT_EVENT, VISIT};
pub use host::EventHost;
