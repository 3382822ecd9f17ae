use leptos::prelude::*;
use sitewatch_domain::action::{CHECK_ALL_BUSY_LABEL, CHECK_ALL_LABEL};

/// Button triggering a check of every website; disabled while `busy`.
#[component]
pub fn CheckAllButton(
    busy: ReadSignal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="btn-check-all"
            disabled=move || busy.get()
            on:click=move |_| on_click.run(())
        >
            {move || if busy.get() { CHECK_ALL_BUSY_LABEL } else { CHECK_ALL_LABEL }}
        </button>
    }
}
