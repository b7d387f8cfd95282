use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{LatLong, LocationPoint};

fn pin_icon(fill_color: &str, width: u32, height: u32) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 28 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='{fill_color}' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E"
    )
}

#[component]
pub fn LocationMarker(
    location: LocationPoint,
    position: LatLong,
    is_active: bool,
    on_select: Callback<String>,
) -> impl IntoView {
    // Active pins are drawn larger and anchored at their tip.
    let (icon_svg, icon_size, icon_anchor) = if is_active {
        (pin_icon("%23111827", 36, 54), (36.0, 54.0), (18.0, 54.0))
    } else {
        (pin_icon("%235b21b6", 24, 36), (24.0, 36.0), (12.0, 36.0))
    };

    let slug = location.slug.clone();
    let mouse_events = MouseEvents::new().on_click(move |_| on_select.run(slug.clone()));

    view! {
        <Marker
            position=Position::new(position.lat, position.long)
            draggable=false
            icon_url=Some(icon_svg)
            icon_size=Some(icon_size)
            icon_anchor=Some(icon_anchor)
            mouse_events
        >
            <Popup>
                <strong>{location.name.clone()}</strong>
                {location.alt.clone().map(|alt| view! { <p class="marker-alt">{alt}</p> })}
            </Popup>
        </Marker>
    }
}
