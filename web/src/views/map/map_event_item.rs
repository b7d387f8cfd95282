use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance};

use crate::{
    config::MapEventItemConfig,
    error::MapError,
    store::{use_map_sync, MapStore},
    utils::event_date::{status_label, time_range_label, EventDateDisplay, EventStatus},
};

/// A list row for one event. It registers its location with the paired map
/// and selects it on click. Unmounting leaves the point registered.
#[component]
pub fn MapEventItem(
    #[prop(into)] item: Signal<MapEventItemConfig>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    render_event_item(item, children)
}

fn render_event_item(
    item: Signal<MapEventItemConfig>,
    children: Option<Children>,
) -> Result<AnyView, MapError> {
    let store = use_map_sync()?.store;

    // Effects run after the row is in the DOM, never during render.
    Effect::new(move |_| {
        let item = item.get();
        store.register(&item.map_id, item.point());
    });

    let on_click = move |_| item.with_untracked(|item| select_row(store, item));
    let is_active = move || {
        item.with(|item| store.get_active(&item.map_id).as_deref() == Some(item.slug.as_str()))
    };
    let date = Memo::new(move |_| item.with(|item| EventDateDisplay::from_raw(item.event_date.as_deref())));

    let trailing = match children {
        Some(children) => view! { <div class="event-item-extra">{children()}</div> }.into_any(),
        None => view! {
            {move || {
                let raw = item.with(|item| item.status.clone());
                let status = EventStatus::parse(raw.as_deref());
                let appearance = match status {
                    EventStatus::Upcoming => BadgeAppearance::Filled,
                    EventStatus::Complete | EventStatus::Default => BadgeAppearance::Outline,
                };
                view! {
                    <Badge appearance class=status.css_class().to_string()>
                        {status_label(raw.as_deref())}
                    </Badge>
                }
            }}
        }
        .into_any(),
    };

    Ok(view! {
        <div
            class="map-event-item"
            class:is-active=is_active
            data-location-slug=move || item.with(|item| item.slug.clone())
            data-name=move || item.with(|item| item.name.clone())
            on:click=on_click
        >
            <div class="event-date-block">
                <p class="event-day">{move || date.with(|date| date.day.clone())}</p>
                <p class="event-weekday">{move || date.with(|date| date.weekday.clone())}</p>
                <p class="event-month">{move || date.with(|date| date.month_year.clone())}</p>
            </div>

            <div class="event-body">
                <h3 class="event-name">{move || item.with(|item| item.name.clone())}</h3>
                <div class="event-meta">
                    <span class="event-long-date">{move || date.with(|date| date.long_date.clone())}</span>
                    <span class="event-time-range">
                        {move || item.with(|item| time_range_label(item.time_range.as_deref()))}
                    </span>
                </div>
            </div>

            {trailing}
        </div>
    }
    .into_any())
}

fn select_row(store: MapStore, item: &MapEventItemConfig) {
    store.set_active(&item.map_id, Some(item.slug.clone()));
}
