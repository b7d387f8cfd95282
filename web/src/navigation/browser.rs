use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::{
    NavigationListener, NavigationState, NavigationSubscription, QueryParams, FILTER_CHANGE_EVENT,
    POPSTATE_EVENT,
};
use crate::error::MapError;

/// `window.location` / `window.history` of the hydrated page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigation;

impl NavigationState for BrowserNavigation {
    fn query(&self) -> QueryParams {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        QueryParams::parse(&search)
    }

    fn replace_query(&self, query: &QueryParams) -> Result<(), MapError> {
        let window = web_sys::window()
            .ok_or_else(|| MapError::Navigation("no global `window` exists".to_string()))?;
        let location = window.location();
        let url = format!(
            "{}//{}{}{}",
            location.protocol().map_err(js_error)?,
            location.host().map_err(js_error)?,
            location.pathname().map_err(js_error)?,
            query.to_search()
        );

        let state = js_sys::Object::new();
        js_sys::Reflect::set(&state, &JsValue::from_str("path"), &JsValue::from_str(&url))
            .map_err(js_error)?;

        window
            .history()
            .map_err(js_error)?
            .replace_state_with_url(&state, "", Some(&url))
            .map_err(js_error)
    }

    fn notify_filter_change(&self) {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("No window to dispatch {}", FILTER_CHANGE_EVENT);
            return;
        };
        match web_sys::Event::new(FILTER_CHANGE_EVENT) {
            Ok(event) => {
                if let Err(err) = window.dispatch_event(&event) {
                    leptos::logging::warn!("Failed to dispatch {}: {:?}", FILTER_CHANGE_EVENT, err);
                }
            }
            Err(err) => {
                leptos::logging::warn!("Failed to create {}: {:?}", FILTER_CHANGE_EVENT, err);
            }
        }
    }

    fn subscribe(&self, listener: NavigationListener) -> NavigationSubscription {
        let on_popstate = listener.clone();
        let popstate = window_event_listener_untyped(POPSTATE_EVENT, move |_| on_popstate());
        let filter_change = window_event_listener_untyped(FILTER_CHANGE_EVENT, move |_| listener());

        NavigationSubscription::new(move || {
            popstate.remove();
            filter_change.remove();
        })
    }
}

fn js_error(err: JsValue) -> MapError {
    MapError::Navigation(format!("{err:?}"))
}
