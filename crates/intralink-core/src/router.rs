//! Router adapter
//!
//! Bridges interceptor visits into an external router and router-initiated
//! navigations back into visit events. Every event carries a
//! [`VisitOrigin`] tag and each side ignores events the other side already
//! handled, so the two never feed each other forever.

use std::sync::Arc;

use intralink_events::{Subscription, VisitOrigin, VISIT};

use crate::interceptor::Interceptor;

/// External router surface the adapter drives.
pub trait Router: Send + Sync {
    /// Render the route for `url`.
    fn push(&self, url: &str);

    /// Register for the router's own completed navigations. Routers
    /// without such a signal keep the default no-op.
    fn on_navigated(&self, _callback: Box<dyn Fn(&str) + Send + Sync>) {}
}

/// Wire `router` to `interceptor` in both directions.
///
/// Intercepted visits drive `router.push`; navigations the router reports
/// re-enter as visits tagged [`VisitOrigin::Router`], which the forwarding
/// subscriber skips. Returns the forwarding subscription; disposing it
/// detaches the interceptor-to-router direction.
pub fn connect_router(interceptor: &Interceptor, router: Arc<dyn Router>) -> Subscription {
    let forward = {
        let router = Arc::clone(&router);
        interceptor.on(VISIT, move |event| {
            if event.origin == VisitOrigin::Router {
                // The router performed this navigation itself.
                return;
            }
            router.push(&event.url);
        })
    };

    let backward = interceptor.clone();
    router.on_navigated(Box::new(move |url| backward.router_visit(url)));

    forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::interceptor::StartOptions;
    use intralink_events::VisitEvent;
    use parking_lot::{Mutex, RwLock};
    use url::Url;

    type NavigatedCallback = Box<dyn Fn(&str) + Send + Sync>;

    #[derive(Default)]
    struct ToyRouter {
        pushes: Mutex<Vec<String>>,
        navigated: RwLock<Option<NavigatedCallback>>,
    }

    impl ToyRouter {
        /// Simulate the router completing a navigation of its own.
        fn navigate(&self, url: &str) {
            if let Some(callback) = self.navigated.read().as_ref() {
                callback(url);
            }
        }
    }

    impl Router for ToyRouter {
        fn push(&self, url: &str) {
            self.pushes.lock().push(url.to_string());
        }

        fn on_navigated(&self, callback: NavigatedCallback) {
            *self.navigated.write() = Some(callback);
        }
    }

    fn setup() -> (Interceptor, Arc<MemoryHost>, Arc<ToyRouter>) {
        let host = Arc::new(MemoryHost::new(Url::parse("https://x.test/a").unwrap()));
        let interceptor = Interceptor::with_shared_host(host.clone());
        interceptor.start(StartOptions::default());

        let router = Arc::new(ToyRouter::default());
        let _sub = connect_router(&interceptor, router.clone());
        (interceptor, host, router)
    }

    #[test]
    fn test_visits_drive_the_router() {
        let (interceptor, _host, router) = setup();

        interceptor.visit("/b");
        interceptor.visit("https://other.test/c");

        assert_eq!(*router.pushes.lock(), vec!["https://x.test/b".to_string()]);
    }

    #[test]
    fn test_router_navigation_does_not_ping_pong() {
        let (interceptor, host, router) = setup();
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let sink = Arc::clone(&events);
            interceptor.on(VISIT, move |ev: &VisitEvent| sink.lock().push(ev.clone()));
        }

        router.navigate("/dashboard");

        // One visit event tagged as router-originated, no echo back into
        // the router, no history entry.
        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].url, "https://x.test/dashboard");
        assert_eq!(events[0].origin, VisitOrigin::Router);
        assert!(router.pushes.lock().is_empty());
        assert_eq!(host.history_len(), 1);
    }

    #[test]
    fn test_disposing_the_bridge_detaches_forwarding() {
        let host = Arc::new(MemoryHost::new(Url::parse("https://x.test/a").unwrap()));
        let interceptor = Interceptor::with_shared_host(host);
        interceptor.start(StartOptions::default());

        let router = Arc::new(ToyRouter::default());
        let sub = connect_router(&interceptor, router.clone());

        interceptor.visit("/b");
        sub.dispose();
        interceptor.visit("/c");

        assert_eq!(*router.pushes.lock(), vec!["https://x.test/b".to_string()]);
    }
}
