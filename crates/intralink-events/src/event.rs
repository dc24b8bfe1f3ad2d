//! Visit event payload

use serde::{Deserialize, Serialize};

/// Reserved event name for completed visits.
pub const VISIT: &str = "visit";

/// Native custom event raised on the host page for every visit, so
/// consumers listening on the document see the same notification as
/// subscribers registered through [`crate::Dispatcher::on`].
pub const DOM_VISIT_EVENT: &str = "intralink:visit";

/// Which side of a router bridge initiated a navigation.
///
/// Router adapters use this tag to ignore events they caused themselves,
/// which is what keeps the two sides from notifying each other forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitOrigin {
    /// Initiated through the interceptor (click or programmatic visit)
    Core,
    /// Reported by an attached router's own navigation
    Router,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// Absolute URL of the visit
    pub url: String,
    /// True when the navigation came from the browser's back/forward stack
    pub from_history: bool,
    /// Origin tag; see [`VisitOrigin`]
    pub origin: VisitOrigin,
}
