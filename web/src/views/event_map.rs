use leptos::prelude::*;

use crate::{
    components::{error::ErrorView, loading::LoadingView},
    config::EventPage,
    server::get_event_page,
    views::map::{FilterItem, MapClient, MapEventItem},
};

#[component]
pub fn EventMapPage() -> impl IntoView {
    let page = Resource::new(|| (), |_| async move { get_event_page().await });

    view! {
        <Suspense fallback=|| view! {
            <LoadingView message=Some("Fetching events...".to_string()) />
        }>
            {move ||
                match page.get() {
                    Some(Ok(page)) => view! { <EventMapLayout page /> }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::error!("Error loading event page: {}", err);
                        view! {
                            <ErrorView message=Some("Error loading events...".to_string()) />
                        }.into_any()
                    },
                    None => view! {
                        <LoadingView message=Some("Fetching events...".to_string()) />
                    }.into_any(),
                }
            }
        </Suspense>
    }
}

/// Filter rows and event rows beside the map they are paired with.
#[component]
fn EventMapLayout(page: EventPage) -> impl IntoView {
    let EventPage { map, filters, events } = page;

    view! {
        <div class="event-map-layout">
            <aside class="event-list">
                <div class="map-filter-list">
                    {filters.into_iter().map(|config| view! { <FilterItem config /> }).collect_view()}
                </div>
                {events.into_iter().map(|item| view! { <MapEventItem item /> }).collect_view()}
            </aside>
            <section class="event-map-pane">
                <MapClient config=map />
            </section>
        </div>
    }
}
