use leptos::prelude::*;

use crate::{
    config::FilterItemConfig,
    error::MapError,
    filter::{use_active_filter, FilterResolver},
    store::use_map_sync,
};

/// A row that narrows every map on the page to one filter slug. Clicking the
/// active row clears the filter.
#[component]
pub fn FilterItem(#[prop(into)] config: FilterItemConfig) -> impl IntoView {
    render_filter_item(config)
}

fn render_filter_item(config: FilterItemConfig) -> Result<AnyView, MapError> {
    let filter = use_map_sync()?.filter;
    let active_filter = use_active_filter(&filter);
    let FilterItemConfig { filter_slug, name } = config;

    let is_active = {
        let filter_slug = filter_slug.clone();
        move || active_filter.get().as_deref() == Some(filter_slug.as_str())
    };
    let on_click = {
        let filter_slug = filter_slug.clone();
        move |_| toggle_filter(&filter, &filter_slug)
    };
    let data_name = name.clone();

    Ok(view! {
        <div
            class="map-filter-item"
            class:is-active=is_active
            data-filter-slug=filter_slug
            data-name=data_name
            on:click=on_click
        >
            <h3 class="map-filter-name">{name}</h3>
        </div>
    }
    .into_any())
}

fn toggle_filter(filter: &FilterResolver, filter_slug: &str) {
    match filter.toggle(filter_slug) {
        Ok(next) => leptos::logging::log!("Map filter is now {:?}", next),
        Err(err) => leptos::logging::error!("Filter toggle failed: {}", err),
    }
}
