use std::{fmt, sync::Arc};

use leptos::prelude::*;

use crate::{
    error::MapError,
    navigation::{NavigationState, NavigationSubscription, QueryParams},
};

pub const AREA_PARAM: &str = "area";
/// Older links still carry `county`; it is read through and replaced by
/// `area` on the next toggle.
pub const LEGACY_COUNTY_PARAM: &str = "county";

/// The active filter slug: `area`, falling back to `county`. A present but
/// empty value means no filter.
pub fn resolve_filter(query: &QueryParams) -> Option<String> {
    query
        .get(AREA_PARAM)
        .or_else(|| query.get(LEGACY_COUNTY_PARAM))
        .filter(|slug| !slug.is_empty())
        .map(str::to_string)
}

/// Applies a filter-row click to `query` and returns the filter it leaves
/// active. `county` never survives a click.
pub fn apply_toggle(query: &mut QueryParams, filter_slug: &str) -> Option<String> {
    let current = resolve_filter(query);
    query.remove(LEGACY_COUNTY_PARAM);

    if filter_slug.is_empty() || current.as_deref() == Some(filter_slug) {
        query.remove(AREA_PARAM);
        None
    } else {
        query.set(AREA_PARAM, filter_slug);
        Some(filter_slug.to_string())
    }
}

#[derive(Clone)]
pub struct FilterResolver {
    navigation: Arc<dyn NavigationState>,
}

impl FilterResolver {
    pub fn new(navigation: Arc<dyn NavigationState>) -> Self {
        Self { navigation }
    }

    pub fn current(&self) -> Option<String> {
        resolve_filter(&self.navigation.query())
    }

    /// Toggles `filter_slug`, rewrites the query in place and broadcasts the
    /// change so every mounted map re-resolves.
    pub fn toggle(&self, filter_slug: &str) -> Result<Option<String>, MapError> {
        let mut query = self.navigation.query();
        let next = apply_toggle(&mut query, filter_slug);
        self.navigation.replace_query(&query)?;
        self.navigation.notify_filter_change();
        Ok(next)
    }

    pub fn subscribe(
        &self,
        on_change: impl Fn() + Send + Sync + 'static,
    ) -> NavigationSubscription {
        self.navigation.subscribe(Arc::new(on_change))
    }
}

impl fmt::Debug for FilterResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterResolver")
            .field("current", &self.current())
            .finish()
    }
}

/// The current filter as a signal, refreshed on back/forward navigation and on
/// filter broadcasts for as long as the calling component is mounted.
pub fn use_active_filter(filter: &FilterResolver) -> ReadSignal<Option<String>> {
    let (active, set_active) = signal(filter.current());

    let resolver = filter.clone();
    let subscription = filter.subscribe(move || set_active.set(resolver.current()));
    on_cleanup(move || drop(subscription));

    active
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::navigation::MemoryNavigation;

    fn resolver(search: &str) -> (MemoryNavigation, FilterResolver) {
        let navigation = MemoryNavigation::with_search(search);
        let resolver = FilterResolver::new(Arc::new(navigation.clone()));
        (navigation, resolver)
    }

    #[test]
    fn area_wins_over_county() {
        let query = QueryParams::parse("?county=victoria&area=saanich");
        assert_eq!(resolve_filter(&query).as_deref(), Some("saanich"));
        assert_eq!(resolve_filter(&QueryParams::new()), None);
    }

    #[test]
    fn empty_area_masks_county() {
        let query = QueryParams::parse("?area=&county=victoria");
        assert_eq!(resolve_filter(&query), None);
    }

    #[test]
    fn toggling_twice_returns_to_no_filter() {
        let (navigation, resolver) = resolver("");

        assert_eq!(resolver.toggle("x").unwrap().as_deref(), Some("x"));
        assert_eq!(resolver.current().as_deref(), Some("x"));

        assert_eq!(resolver.toggle("x").unwrap(), None);
        assert_eq!(resolver.current(), None);
        assert!(navigation.query().is_empty());
    }

    #[test]
    fn switching_filters_leaves_no_county() {
        let (navigation, resolver) = resolver("?county=victoria");
        resolver.toggle("x").unwrap();
        resolver.toggle("y").unwrap();

        let query = navigation.query();
        assert_eq!(query.get(AREA_PARAM), Some("y"));
        assert!(!query.contains(LEGACY_COUNTY_PARAM));
    }

    #[test]
    fn legacy_county_migrates_on_first_click() {
        let (navigation, resolver) = resolver("?county=victoria&page=2");
        assert_eq!(resolver.current().as_deref(), Some("victoria"));

        resolver.toggle("saanich").unwrap();
        assert_eq!(navigation.query().to_string(), "page=2&area=saanich");
    }

    #[test]
    fn clicking_active_legacy_filter_clears_both_keys() {
        let (navigation, resolver) = resolver("?county=victoria&page=2");
        assert_eq!(resolver.toggle("victoria").unwrap(), None);
        assert_eq!(navigation.query().to_string(), "page=2");
    }

    #[test]
    fn empty_filter_slug_clears() {
        let (navigation, resolver) = resolver("?area=x");
        assert_eq!(resolver.toggle("").unwrap(), None);
        assert!(navigation.query().is_empty());
    }

    #[test]
    fn toggle_replaces_in_place_and_broadcasts() {
        let (navigation, resolver) = resolver("?area=x");
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _subscription = resolver.subscribe(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        resolver.toggle("y").unwrap();
        resolver.toggle("y").unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(navigation.history_len(), 1);
    }

    #[test]
    fn active_filter_signal_follows_navigation() {
        let owner = Owner::new();
        owner.set();
        let (navigation, resolver) = resolver("?area=x");

        let active = use_active_filter(&resolver);
        assert_eq!(active.get_untracked().as_deref(), Some("x"));

        resolver.toggle("y").unwrap();
        assert_eq!(active.get_untracked().as_deref(), Some("y"));

        navigation.push(QueryParams::parse("?area=z"));
        assert_eq!(active.get_untracked().as_deref(), Some("y"));
        assert!(navigation.back());
        assert_eq!(active.get_untracked().as_deref(), Some("y"));
        assert_eq!(navigation.query().get(AREA_PARAM), Some("y"));
    }

    #[test]
    fn active_filter_releases_subscription_with_owner() {
        let owner = Owner::new();
        owner.set();
        let (navigation, resolver) = resolver("");

        let child = owner.child();
        child.with(|| {
            let _active = use_active_filter(&resolver);
        });
        assert_eq!(navigation.listener_count(), 1);

        child.cleanup();
        assert_eq!(navigation.listener_count(), 0);
    }
}
