use std::collections::HashMap;

use shared_types::LocationPoint;

/// Ordered location collections, one per map instance.
///
/// A missing map id behaves exactly like an empty collection, so every
/// operation here is total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationRegistry {
    by_map: HashMap<String, Vec<LocationPoint>>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts by slug. An existing entry is replaced where it stands; a new
    /// slug is appended.
    pub fn register(&mut self, map_id: &str, point: LocationPoint) {
        let locations = self.by_map.entry(map_id.to_string()).or_default();
        match locations.iter_mut().find(|existing| existing.slug == point.slug) {
            Some(existing) => *existing = point,
            None => locations.push(point),
        }
    }

    pub fn get_all(&self, map_id: &str) -> &[LocationPoint] {
        self.by_map.get(map_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, map_id: &str, slug: &str) -> Option<&LocationPoint> {
        self.get_all(map_id).iter().find(|point| point.slug == slug)
    }

    /// Replaces the whole collection. Duplicate slugs collapse onto the first
    /// occurrence's position with the last occurrence's values.
    pub fn set_locations(&mut self, map_id: &str, points: Vec<LocationPoint>) {
        self.by_map.remove(map_id);
        for point in points {
            self.register(map_id, point);
        }
    }

    pub fn clear(&mut self, map_id: &str) {
        self.by_map.remove(map_id);
    }

    pub fn len(&self, map_id: &str) -> usize {
        self.get_all(map_id).len()
    }

    pub fn is_empty(&self, map_id: &str) -> bool {
        self.len(map_id) == 0
    }
}
