use leptos::prelude::*;

/// Shown for any path other than the dashboard.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to the monitored websites"</a>
            </p>
        </div>
    }
}
