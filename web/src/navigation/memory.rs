use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError, Weak,
};

use super::{NavigationListener, NavigationState, NavigationSubscription, QueryParams};
use crate::error::MapError;

/// History kept in process memory. Used for server rendering and tests.
#[derive(Clone, Default)]
pub struct MemoryNavigation {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    // Never empty once accessed through `entries`.
    history: Mutex<Vec<QueryParams>>,
    listeners: Mutex<Vec<(u64, NavigationListener)>>,
    next_listener: AtomicU64,
}

impl MemoryInner {
    fn entries(&self) -> MutexGuard<'_, Vec<QueryParams>> {
        let mut history = lock(&self.history);
        if history.is_empty() {
            history.push(QueryParams::new());
        }
        history
    }

    fn notify(&self) {
        let listeners: Vec<NavigationListener> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl MemoryNavigation {
    pub fn with_search(search: &str) -> Self {
        let navigation = Self::default();
        lock(&navigation.inner.history).push(QueryParams::parse(search));
        navigation
    }

    /// Navigates to a new entry without notifying, like following a link.
    pub fn push(&self, query: QueryParams) {
        self.inner.entries().push(query);
    }

    /// Steps back one entry and notifies subscribers, like the browser back
    /// button. Returns `false` at the first entry.
    pub fn back(&self) -> bool {
        let moved = {
            let mut history = self.inner.entries();
            if history.len() > 1 {
                history.pop();
                true
            } else {
                false
            }
        };
        if moved {
            self.inner.notify();
        }
        moved
    }

    pub fn history_len(&self) -> usize {
        self.inner.entries().len()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }
}

impl NavigationState for MemoryNavigation {
    fn query(&self) -> QueryParams {
        self.inner.entries().last().cloned().unwrap_or_default()
    }

    fn replace_query(&self, query: &QueryParams) -> Result<(), MapError> {
        let mut history = self.inner.entries();
        if let Some(current) = history.last_mut() {
            *current = query.clone();
        }
        Ok(())
    }

    fn notify_filter_change(&self) {
        self.inner.notify();
    }

    fn subscribe(&self, listener: NavigationListener) -> NavigationSubscription {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, listener));

        let inner: Weak<MemoryInner> = Arc::downgrade(&self.inner);
        NavigationSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                lock(&inner.listeners).retain(|(existing, _)| *existing != id);
            }
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn counter(navigation: &MemoryNavigation) -> (Arc<AtomicUsize>, NavigationSubscription) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let subscription = navigation.subscribe(Arc::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        (calls, subscription)
    }

    #[test]
    fn replace_rewrites_current_entry_only() {
        let navigation = MemoryNavigation::with_search("?county=victoria");
        navigation
            .replace_query(&QueryParams::parse("?area=saanich"))
            .unwrap();

        assert_eq!(navigation.history_len(), 1);
        assert_eq!(navigation.query().get("area"), Some("saanich"));
        assert_eq!(navigation.query().get("county"), None);
    }

    #[test]
    fn back_restores_previous_entry_and_notifies() {
        let navigation = MemoryNavigation::with_search("?area=victoria");
        let (calls, _subscription) = counter(&navigation);

        navigation.push(QueryParams::parse("?area=saanich"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(navigation.back());
        assert_eq!(navigation.query().get("area"), Some("victoria"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(!navigation.back());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let navigation = MemoryNavigation::default();
        let (calls, subscription) = counter(&navigation);

        navigation.notify_filter_change();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigation.listener_count(), 1);

        drop(subscription);
        navigation.notify_filter_change();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigation.listener_count(), 0);
    }

    #[test]
    fn subscription_released_on_unwind() {
        let navigation = MemoryNavigation::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let (_calls, _subscription) = counter(&navigation);
            panic!("widget failed while mounted");
        }));

        assert!(result.is_err());
        assert_eq!(navigation.listener_count(), 0);
    }

    #[test]
    fn listener_may_read_query_during_notify() {
        let navigation = MemoryNavigation::with_search("?area=oak-bay");
        let reader = navigation.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let _subscription = navigation.subscribe(Arc::new(move || {
            *lock(&sink) = reader.query().get("area").map(str::to_string);
        }));

        navigation.notify_filter_change();
        assert_eq!(lock(&seen).as_deref(), Some("oak-bay"));
    }
}
