pub mod registry;
pub mod selection;

use std::sync::Arc;

use leptos::prelude::*;
use shared_types::LocationPoint;

use crate::{error::MapError, filter::FilterResolver, navigation::NavigationState};

pub use registry::LocationRegistry;
pub use selection::ActiveSelection;

/// Shared location and selection state for every map on the page.
///
/// Reads are tracked, so a map reading `get_all` re-renders on the next
/// `register`. Writes happen synchronously and the last one wins.
#[derive(Clone, Copy, Debug)]
pub struct MapStore {
    locations: RwSignal<LocationRegistry>,
    selection: RwSignal<ActiveSelection>,
}

impl MapStore {
    pub fn new() -> Self {
        Self {
            locations: RwSignal::new(LocationRegistry::new()),
            selection: RwSignal::new(ActiveSelection::new()),
        }
    }

    pub fn register(&self, map_id: &str, point: LocationPoint) {
        // Rows re-run their effect on every prop change; identical points must
        // not wake the map.
        let unchanged = self
            .locations
            .with_untracked(|registry| registry.get(map_id, &point.slug) == Some(&point));
        if unchanged {
            return;
        }
        self.locations
            .update(|registry| registry.register(map_id, point));
    }

    pub fn set_locations(&self, map_id: &str, points: Vec<LocationPoint>) {
        self.locations
            .update(|registry| registry.set_locations(map_id, points));
    }

    pub fn get_all(&self, map_id: &str) -> Vec<LocationPoint> {
        self.locations
            .with(|registry| registry.get_all(map_id).to_vec())
    }

    pub fn clear(&self, map_id: &str) {
        if self.locations.with_untracked(|registry| registry.is_empty(map_id)) {
            return;
        }
        self.locations.update(|registry| registry.clear(map_id));
    }

    pub fn set_active(&self, map_id: &str, slug: Option<String>) {
        self.selection
            .update(|selection| selection.set_active(map_id, slug));
    }

    pub fn get_active(&self, map_id: &str) -> Option<String> {
        self.selection
            .with(|selection| selection.get_active(map_id).map(str::to_string))
    }

    pub fn clear_active(&self, map_id: &str) {
        self.selection.update(|selection| selection.clear_active(map_id));
    }

    pub fn get_active_location(&self, map_id: &str) -> Option<LocationPoint> {
        self.selection.with(|selection| {
            self.locations
                .with(|registry| selection.get_active_location(map_id, registry).cloned())
        })
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a map widget or list row needs, provided once per page.
#[derive(Clone)]
pub struct MapSyncContext {
    pub store: MapStore,
    pub filter: FilterResolver,
}

impl MapSyncContext {
    pub fn new(navigation: Arc<dyn NavigationState>) -> Self {
        Self {
            store: MapStore::new(),
            filter: FilterResolver::new(navigation),
        }
    }
}

pub fn use_map_sync() -> Result<MapSyncContext, MapError> {
    use_context::<MapSyncContext>().ok_or(MapError::MissingContext("MapSyncContext"))
}
