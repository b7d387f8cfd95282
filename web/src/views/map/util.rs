use shared_types::{LatLong, LocationPoint};

/// Used when neither the locations nor the widget supply a center.
pub const FALLBACK_CENTER: LatLong = LatLong::new(49.30536273859448, -123.14493678310713);
pub const INITIAL_ZOOM: f64 = 10.0;
pub const FOLLOW_ZOOM: f64 = 12.0;
pub const FOLLOW_DURATION_SECS: f64 = 0.75;

pub fn visible_locations(all: &[LocationPoint], filter: Option<&str>) -> Vec<LocationPoint> {
    match filter {
        Some(filter_slug) => all
            .iter()
            .filter(|location| location.matches_filter(filter_slug))
            .cloned()
            .collect(),
        None => all.to_vec(),
    }
}

/// First visible location, then the widget defaults, then [`FALLBACK_CENTER`].
/// Only the first location is considered; later ones never stand in for it.
pub fn default_center(visible: &[LocationPoint], defaults: Option<LatLong>) -> LatLong {
    visible
        .first()
        .and_then(LocationPoint::lat_long)
        .or(defaults)
        .unwrap_or(FALLBACK_CENTER)
}

/// Where the view should fly for the active slug, if anywhere.
pub fn follow_target(visible: &[LocationPoint], active_slug: Option<&str>) -> Option<LatLong> {
    let active_slug = active_slug?;
    visible
        .iter()
        .find(|location| location.slug == active_slug)
        .and_then(LocationPoint::lat_long)
}

/// Visible locations that can actually be drawn, with parsed positions.
pub fn marker_positions(visible: &[LocationPoint]) -> Vec<(LocationPoint, LatLong)> {
    visible
        .iter()
        .filter_map(|location| Some((location.clone(), location.lat_long()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn located(slug: &str, lat: &str, lng: &str, filter: &str) -> LocationPoint {
        LocationPoint::new(slug, slug)
            .with_coords(lat, lng)
            .with_filter(filter)
    }

    #[test]
    fn no_filter_shows_everything() {
        let all = vec![located("a", "1", "1", "x"), LocationPoint::new("b", "B")];
        assert_eq!(visible_locations(&all, None), all);
    }

    #[test]
    fn filter_keeps_only_matching_slugs() {
        let all = vec![
            located("a", "1", "1", "x"),
            located("b", "2", "2", "y"),
            LocationPoint::new("c", "Unfiltered"),
            located("d", "4", "4", "x"),
        ];
        let slugs: Vec<_> = visible_locations(&all, Some("x"))
            .into_iter()
            .map(|location| location.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "d"]);
    }

    #[test]
    fn center_prefers_first_location() {
        let visible = vec![located("a", "1.5", "2.5", "x"), located("b", "9", "9", "x")];
        let center = default_center(&visible, Some(LatLong::new(48.0, -123.0)));
        assert_approx_eq!(center.lat, 1.5);
        assert_approx_eq!(center.long, 2.5);
    }

    #[test]
    fn center_uses_defaults_without_locations() {
        let center = default_center(&[], Some(LatLong::new(48.4284, -123.3656)));
        assert_approx_eq!(center.lat, 48.4284);
        assert_approx_eq!(center.long, -123.3656);
    }

    #[test]
    fn center_skips_to_defaults_when_first_has_no_coordinates() {
        let visible = vec![LocationPoint::new("tbd", "TBD"), located("b", "9", "9", "x")];
        let center = default_center(&visible, Some(LatLong::new(48.0, -123.0)));
        assert_approx_eq!(center.lat, 48.0);
    }

    #[test]
    fn center_falls_back_to_fixed_pair() {
        let center = default_center(&[], None);
        assert_approx_eq!(center.lat, 49.30536273859448);
        assert_approx_eq!(center.long, -123.14493678310713);
    }

    #[test]
    fn follow_resolves_within_visible_set_only() {
        let all = vec![located("a", "1", "1", "x"), located("b", "2", "2", "y")];
        let visible = visible_locations(&all, Some("x"));

        assert_eq!(follow_target(&visible, Some("a")), Some(LatLong::new(1.0, 1.0)));
        assert_eq!(follow_target(&visible, Some("b")), None);
        assert_eq!(follow_target(&visible, None), None);
    }

    #[test]
    fn follow_ignores_locations_without_coordinates() {
        let visible = vec![LocationPoint::new("tbd", "TBD")];
        assert_eq!(follow_target(&visible, Some("tbd")), None);
    }

    #[test]
    fn markers_drop_unplaceable_locations() {
        let visible = vec![
            located("a", "1", "1", "x"),
            LocationPoint::new("tbd", "TBD"),
            located("bad", "north", "1", "x"),
        ];
        let markers = marker_positions(&visible);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].0.slug, "a");
    }
}
