#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;
pub mod query;

use std::{fmt, sync::Arc};

use crate::error::MapError;

#[cfg(feature = "hydrate")]
pub use browser::BrowserNavigation;
pub use memory::MemoryNavigation;
pub use query::QueryParams;

/// Window event fired after a filter toggle rewrites the query string.
/// `history.replaceState` raises no event of its own.
pub const FILTER_CHANGE_EVENT: &str = "map-filter-change";
pub const POPSTATE_EVENT: &str = "popstate";

pub type NavigationListener = Arc<dyn Fn() + Send + Sync>;

/// Read/write access to the page's navigation query state.
pub trait NavigationState: Send + Sync {
    fn query(&self) -> QueryParams;

    /// Rewrites the current entry's query in place; no history entry is added.
    fn replace_query(&self, query: &QueryParams) -> Result<(), MapError>;

    /// Broadcasts [`FILTER_CHANGE_EVENT`] to every subscriber on the page.
    fn notify_filter_change(&self);

    /// Calls `listener` on back/forward navigation and on every filter change
    /// broadcast, until the returned subscription is dropped.
    fn subscribe(&self, listener: NavigationListener) -> NavigationSubscription;
}

/// Releases its listeners when dropped.
#[must_use = "dropping the subscription immediately unsubscribes"]
pub struct NavigationSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl NavigationSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for NavigationSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for NavigationSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The real browser history in hydrated builds. On the server the history is
/// seeded from the request query so the first render already reflects a deep
/// link like `?area=victoria`.
pub fn default_navigation() -> Arc<dyn NavigationState> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserNavigation)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        seeded_navigation(request_query().as_deref())
    }
}

/// In-memory history holding one entry with the given raw query string.
pub fn seeded_navigation(query: Option<&str>) -> Arc<dyn NavigationState> {
    Arc::new(MemoryNavigation::with_search(query.unwrap_or_default()))
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
fn request_query() -> Option<String> {
    leptos::prelude::use_context::<axum::http::request::Parts>()
        .and_then(|parts| parts.uri.query().map(str::to_string))
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
fn request_query() -> Option<String> {
    None
}
