use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"There is no event map at this address."</p>
            <A href="/">"Back to the event map"</A>
        </div>
    }
}
