//! Widget configuration as supplied by the embedding page.
//!
//! Field names are camelCase on the wire so host-provided JSON deserializes
//! directly. Defaults match what the page builder pre-fills.

use serde::{Deserialize, Serialize};
use shared_types::{LatLong, LocationPoint};
use thiserror::Error;

pub const DEFAULT_MAP_ID: &str = "map-1";
pub const DEFAULT_TILE_SOURCE_URL: &str =
    "http://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png";
pub const DEFAULT_LAT: &str = "48.4284";
pub const DEFAULT_LNG: &str = "-123.3656";

const DEMO_PAGE: &str = include_str!("../demo/event_page.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map id must not be blank")]
    BlankMapId,
    #[error("tile source url `{0}` is missing a {{z}}, {{x}} or {{y}} placeholder")]
    TileTemplate(String),
    #[error("failed to read event page from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse event page: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapWidgetConfig {
    pub map_id: String,
    pub default_lat: Option<String>,
    pub default_lng: Option<String>,
    pub tile_source_url: String,
}

impl Default for MapWidgetConfig {
    fn default() -> Self {
        Self {
            map_id: DEFAULT_MAP_ID.to_string(),
            default_lat: Some(DEFAULT_LAT.to_string()),
            default_lng: Some(DEFAULT_LNG.to_string()),
            tile_source_url: DEFAULT_TILE_SOURCE_URL.to_string(),
        }
    }
}

impl MapWidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_id.trim().is_empty() {
            return Err(ConfigError::BlankMapId);
        }
        let has_placeholders = ["{z}", "{x}", "{y}"]
            .iter()
            .all(|placeholder| self.tile_source_url.contains(placeholder));
        if !has_placeholders {
            return Err(ConfigError::TileTemplate(self.tile_source_url.clone()));
        }
        Ok(())
    }

    /// Explicit default center; `None` unless both values parse.
    pub fn default_center(&self) -> Option<LatLong> {
        LatLong::parse_pair(self.default_lat.as_deref(), self.default_lng.as_deref())
    }
}

/// One list row paired with a map by `map_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapEventItemConfig {
    pub map_id: String,
    pub slug: String,
    pub name: String,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub alt: Option<String>,
    pub filter_slug: Option<String>,
    pub event_date: Option<String>,
    pub time_range: Option<String>,
    pub status: Option<String>,
}

impl Default for MapEventItemConfig {
    fn default() -> Self {
        Self {
            map_id: DEFAULT_MAP_ID.to_string(),
            slug: String::new(),
            name: String::new(),
            lat: None,
            lng: None,
            alt: None,
            filter_slug: None,
            event_date: None,
            time_range: None,
            status: None,
        }
    }
}

impl MapEventItemConfig {
    /// The point this row registers. Blank optional fields count as absent.
    pub fn point(&self) -> LocationPoint {
        LocationPoint {
            slug: self.slug.clone(),
            name: self.name.clone(),
            lat: non_blank(&self.lat),
            lng: non_blank(&self.lng),
            alt: non_blank(&self.alt),
            filter_slug: non_blank(&self.filter_slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterItemConfig {
    pub filter_slug: String,
    pub name: String,
}

/// Everything the demo page renders: one map, its filter rows and its events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPage {
    pub map: MapWidgetConfig,
    pub filters: Vec<FilterItemConfig>,
    pub events: Vec<MapEventItemConfig>,
}

impl EventPage {
    pub fn demo() -> Result<Self, ConfigError> {
        Self::from_json(DEMO_PAGE)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Every event row takes the map's id, so one override re-pairs the page.
    fn with_map(mut self, map: MapWidgetConfig) -> Self {
        for event in &mut self.events {
            event.map_id = map.map_id.clone();
        }
        self.map = map;
        self
    }
}

/// Server-side settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub page_file: Option<String>,
    pub map_id: Option<String>,
    pub tile_source_url: Option<String>,
    pub default_lat: Option<String>,
    pub default_lng: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            page_file: read("EVENT_MAP_PAGE_FILE"),
            map_id: read("EVENT_MAP_ID"),
            tile_source_url: read("EVENT_MAP_TILE_URL"),
            default_lat: read("EVENT_MAP_DEFAULT_LAT"),
            default_lng: read("EVENT_MAP_DEFAULT_LNG"),
        }
    }

    /// Loads the page (file, else the bundled demo) and applies overrides.
    pub fn load_page(&self) -> Result<EventPage, ConfigError> {
        let page = match &self.page_file {
            Some(path) => EventPage::from_file(path)?,
            None => EventPage::demo()?,
        };

        let mut map = page.map.clone();
        if let Some(map_id) = &self.map_id {
            map.map_id = map_id.clone();
        }
        if let Some(url) = &self.tile_source_url {
            map.tile_source_url = url.clone();
        }
        if self.default_lat.is_some() || self.default_lng.is_some() {
            map.default_lat = self.default_lat.clone();
            map.default_lng = self.default_lng.clone();
        }
        map.validate()?;

        Ok(page.with_map(map))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
