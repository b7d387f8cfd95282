use leptos::prelude::*;
use leptos::server;

use crate::config::EventPage;

#[cfg(feature = "ssr")]
use crate::config::SiteConfig;

#[server]
pub async fn get_event_page() -> Result<EventPage, ServerFnError> {
    let site = SiteConfig::from_env();
    match site.load_page() {
        Ok(page) => {
            tracing::debug!(
                map_id = %page.map.map_id,
                events = page.events.len(),
                "Loaded event page"
            );
            Ok(page)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load event page");
            Err(ServerFnError::new(format!("Configuration error: {}", e)))
        }
    }
}

/// Records a widget failure caught by a client-side error boundary.
#[server]
pub async fn report_widget_error(widget: String, message: String) -> Result<(), ServerFnError> {
    tracing::warn!(widget = %widget, message = %message, "Client widget failed to render");
    Ok(())
}
