use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};

use crate::{
    components::{
        error_boundary::MapErrorBoundary,
        loading::MapPlaceholder,
    },
    config::MapWidgetConfig,
    error::MapError,
    filter::use_active_filter,
    store::{use_map_sync, MapStore, MapSyncContext},
    views::map::{
        map_marker::LocationMarker,
        util::{default_center, marker_positions, visible_locations, INITIAL_ZOOM},
    },
};

#[cfg(feature = "hydrate")]
use crate::views::map::util::{follow_target, FOLLOW_DURATION_SECS, FOLLOW_ZOOM};
#[cfg(feature = "hydrate")]
use shared_types::LatLong;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

/// The map half of a map/list pair. Rows with the same `map_id` feed it
/// markers; a failure here renders a fallback panel for this map only.
#[component]
pub fn MapClient(#[prop(into)] config: MapWidgetConfig) -> impl IntoView {
    let label = format!("map-client:{}", config.map_id);
    view! {
        <MapErrorBoundary label>
            {render_map(config)}
        </MapErrorBoundary>
    }
}

fn render_map(config: MapWidgetConfig) -> Result<AnyView, MapError> {
    config.validate()?;
    let MapSyncContext { store, filter } = use_map_sync()?;
    let active_filter = use_active_filter(&filter);
    let defaults = config.default_center();
    let map_id = config.map_id.clone();
    let tile_url = config.tile_source_url;

    let visible = Memo::new({
        let map_id = map_id.clone();
        move |_| visible_locations(&store.get_all(&map_id), active_filter.get().as_deref())
    });
    let active_slug = Memo::new({
        let map_id = map_id.clone();
        move |_| store.get_active(&map_id)
    });
    let center = Memo::new(move |_| visible.with(|visible| default_center(visible, defaults)));
    let markers = Memo::new(move |_| visible.with(|visible| marker_positions(visible)));
    let on_select = select_marker(store, map_id.clone());

    let map = JsRwSignal::new_local(None::<Map>);

    // Stays false on the server and for the first client frame so hydration
    // sees the same placeholder the server sent.
    let map_ready = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                leptos::logging::warn!("No window; map stays on its placeholder");
                return;
            };
            let _ = window.request_animation_frame(
                wasm_bindgen::closure::Closure::once_into_js(move || {
                    map_ready.set(true);
                })
                .as_ref()
                .unchecked_ref(),
            );
        });

        // Re-runs on a new active slug, a new visible set, or once the map
        // instance exists. Each run restarts the flight.
        Effect::new(move |_| {
            let active = active_slug.get();
            let target = visible.with(|visible| follow_target(visible, active.as_deref()));
            let (Some(target), Some(map)) = (target, map.get()) else {
                return;
            };
            if let Err(err) = fly_to(&map, target) {
                leptos::logging::warn!("Fly-to failed: {}", err);
            }
        });
    }

    leptos::logging::log!(
        "Mounted map {} with {} visible locations",
        map_id,
        visible.with_untracked(Vec::len)
    );

    Ok(view! {
        <div class="event-map-container" data-map-id=map_id>
            {move || {
                if map_ready.get() {
                    let start = center.get_untracked();
                    let tile_url = tile_url.clone();
                    view! {
                        <MapContainer
                            class="event-map"
                            center=Position::new(start.lat, start.long)
                            zoom=INITIAL_ZOOM
                            set_view=true
                            map=map.write_only()
                        >
                            <TileLayer url=tile_url attribution=TILE_ATTRIBUTION />
                            {move || {
                                let active = active_slug.get();
                                markers.get().into_iter().map(|(location, position)| {
                                    let is_active = active.as_deref() == Some(location.slug.as_str());
                                    view! {
                                        <LocationMarker location position is_active on_select />
                                    }
                                }).collect_view()
                            }}
                        </MapContainer>
                    }.into_any()
                } else {
                    view! { <MapPlaceholder /> }.into_any()
                }
            }}
        </div>
    }
    .into_any())
}

/// Marker clicks select the same way a list-row click does.
fn select_marker(store: MapStore, map_id: String) -> Callback<String> {
    Callback::new(move |slug: String| store.set_active(&map_id, Some(slug)))
}

#[cfg(feature = "hydrate")]
fn fly_to(map: &Map, target: LatLong) -> Result<(), MapError> {
    let render_error = |err: JsValue| MapError::Render(format!("{err:?}"));

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(FOLLOW_DURATION_SECS),
    )
    .map_err(render_error)?;

    let fly_to: js_sys::Function = js_sys::Reflect::get(map, &JsValue::from_str("flyTo"))
        .map_err(render_error)?
        .dyn_into()
        .map_err(render_error)?;

    let lat_lng = leptos_leaflet::leaflet::LatLng::new(target.lat, target.long);
    fly_to
        .call3(map, &lat_lng, &JsValue::from_f64(FOLLOW_ZOOM), &options)
        .map(|_| ())
        .map_err(render_error)
}
