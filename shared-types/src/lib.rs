use serde::{Deserialize, Serialize};

/// A place a list row contributes to its map. Coordinates stay textual because
/// they come straight from host-supplied widget properties.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationPoint {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_slug: Option<String>,
}

impl LocationPoint {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_coords(mut self, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        self.lat = Some(lat.into());
        self.lng = Some(lng.into());
        self
    }

    pub fn with_filter(mut self, filter_slug: impl Into<String>) -> Self {
        self.filter_slug = Some(filter_slug.into());
        self
    }

    /// Both coordinates parsed, or `None` when either is missing or not a number.
    pub fn lat_long(&self) -> Option<LatLong> {
        let lat = parse_coordinate(self.lat.as_deref()?)?;
        let long = parse_coordinate(self.lng.as_deref()?)?;
        Some(LatLong { lat, long })
    }

    pub fn matches_filter(&self, filter_slug: &str) -> bool {
        self.filter_slug.as_deref() == Some(filter_slug)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Pairs two optional textual coordinates, e.g. a widget's default center.
    pub fn parse_pair(lat: Option<&str>, long: Option<&str>) -> Option<Self> {
        Some(Self {
            lat: parse_coordinate(lat?)?,
            long: parse_coordinate(long?)?,
        })
    }
}

pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
