//! 404 Not Found page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to parkings"</A>
        </div>
    }
}
