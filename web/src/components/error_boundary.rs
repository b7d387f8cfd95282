use leptos::prelude::*;

use crate::components::error::ErrorView;

pub const MAP_FALLBACK_MESSAGE: &str = "Unable to render map right now.";

/// Catches the `Err` returned by one map widget and shows a fixed fallback
/// panel in its place. The rest of the page keeps rendering.
#[component]
pub fn MapErrorBoundary(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=move |errors| {
            for (_, error) in errors.get() {
                log_component_error(error.to_string(), label.clone());
            }
            view! {
                <div class="map-error-fallback">
                    <ErrorView message=Some(MAP_FALLBACK_MESSAGE.to_string()) />
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

pub fn log_component_error(error_message: String, component_name: String) {
    leptos::logging::error!(
        "Map component rendering error in {}: {}",
        component_name,
        error_message
    );

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(err) = crate::server::report_widget_error(component_name, error_message).await {
            leptos::logging::warn!("Failed to report widget error: {}", err);
        }
    });
}
