use std::collections::HashMap;

use shared_types::LocationPoint;

use super::registry::LocationRegistry;

/// Which slug is selected on each map. Slugs are never checked against the
/// registry: a row may be clicked before its point registers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSelection {
    by_map: HashMap<String, Option<String>>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, map_id: &str, slug: Option<String>) {
        self.by_map.insert(map_id.to_string(), slug);
    }

    pub fn get_active(&self, map_id: &str) -> Option<&str> {
        self.by_map.get(map_id).and_then(|slug| slug.as_deref())
    }

    pub fn clear_active(&mut self, map_id: &str) {
        self.set_active(map_id, None);
    }

    pub fn get_active_location<'a>(
        &self,
        map_id: &str,
        registry: &'a LocationRegistry,
    ) -> Option<&'a LocationPoint> {
        registry.get(map_id, self.get_active(map_id)?)
    }
}
