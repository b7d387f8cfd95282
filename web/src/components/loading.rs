use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

pub const MAP_LOADING_MESSAGE: &str = "Map is loading...";

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading events...".to_string())}
            </p>
        </div>
    }
}

/// What a map shows until the interactive map can mount.
#[component]
pub fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="map-placeholder">
            <p class="map-placeholder-message">{MAP_LOADING_MESSAGE}</p>
        </div>
    }
}
