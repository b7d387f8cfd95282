use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="error-view">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "Something went wrong loading the map.".to_string())}
            </MessageBar>
        </div>
    }
}
