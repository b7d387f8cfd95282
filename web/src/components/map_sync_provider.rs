use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    navigation::{default_navigation, NavigationState},
    store::MapSyncContext,
};

/// Owns the page's shared map state. Every map and row rendered inside sees
/// the same store; the state is dropped with the provider.
#[component]
pub fn MapSyncProvider(
    #[prop(optional)] navigation: Option<Arc<dyn NavigationState>>,
    children: Children,
) -> impl IntoView {
    let navigation = navigation.unwrap_or_else(default_navigation);
    provide_context(MapSyncContext::new(navigation));

    children()
}
