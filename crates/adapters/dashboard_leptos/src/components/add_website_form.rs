//! Form for registering a new website, with optional client-certificate settings.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sitewatch_domain::action::Action;
use sitewatch_domain::form::AddWebsiteForm as FormValues;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::{api, browser};

/// Name of the first file picked in a file input, if any.
///
/// Only the name is used: the backend resolves certificate paths on its own host.
fn picked_file_name(ev: &Event) -> Option<String> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0).map(|file| file.name())
}

/// Text input paired with a "Browse" file picker that fills it in.
#[component]
fn PathField(
    /// Field label.
    label: &'static str,
    /// Bound value.
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="path-field">
            {label}
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <span class="browse">
                "Browse"
                <input
                    type="file"
                    class="file-picker"
                    on:change=move |ev| {
                        if let Some(name) = picked_file_name(&ev) {
                            value.set(name);
                        }
                    }
                />
            </span>
        </label>
    }
}

/// The add-website form. Calls `on_added` after the backend accepted the website.
#[component]
pub fn AddWebsiteForm(#[prop(into)] on_added: Callback<()>) -> impl IntoView {
    let url = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let use_pki = RwSignal::new(false);
    let client_cert_path = RwSignal::new(String::new());
    let client_key_path = RwSignal::new(String::new());
    let custom_root_ca_path = RwSignal::new(String::new());
    let skip_tls_verify = RwSignal::new(false);

    let reset = move || {
        url.set(String::new());
        name.set(String::new());
        use_pki.set(false);
        client_cert_path.set(String::new());
        client_key_path.set(String::new());
        custom_root_ca_path.set(String::new());
        skip_tls_verify.set(false);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let values = FormValues {
            url: url.get_untracked(),
            name: name.get_untracked(),
            use_pki: use_pki.get_untracked(),
            client_cert_path: client_cert_path.get_untracked(),
            client_key_path: client_key_path.get_untracked(),
            custom_root_ca_path: custom_root_ca_path.get_untracked(),
            skip_tls_verify: skip_tls_verify.get_untracked(),
        };
        let request = match values.into_request() {
            Ok(request) => request,
            Err(err) => {
                browser::notify(&err.to_string());
                return;
            }
        };

        spawn_local(async move {
            match api::create_website(&request).await {
                Ok(()) => {
                    reset();
                    on_added.run(());
                }
                Err(err) => {
                    leptos::logging::warn!("failed to add website: {err}");
                    browser::notify(Action::Add.failure_message());
                }
            }
        });
    };

    view! {
        <form class="add-website" on:submit=on_submit>
            <h2>"Add Website"</h2>
            <label>
                "URL"
                <input
                    type="url"
                    placeholder="https://example.com"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Name (optional)"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || use_pki.get()
                    on:change=move |ev| use_pki.set(event_target_checked(&ev))
                />
                "Use client certificate (PKI)"
            </label>
            <Show when=move || use_pki.get()>
                <fieldset class="pki-settings">
                    <PathField label="Client certificate" value=client_cert_path/>
                    <PathField label="Client key" value=client_key_path/>
                    <PathField label="Custom root CA" value=custom_root_ca_path/>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || skip_tls_verify.get()
                            on:change=move |ev| skip_tls_verify.set(event_target_checked(&ev))
                        />
                        "Skip TLS verification"
                    </label>
                </fieldset>
            </Show>
            <button type="submit">"Add Website"</button>
        </form>
    }
}
