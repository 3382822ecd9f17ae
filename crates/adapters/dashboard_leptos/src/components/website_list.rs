//! Website list component for one group of the board.

use leptos::prelude::*;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::time::now;
use sitewatch_domain::website::WebsiteRecord;

/// A titled list of websites, or the group's empty message.
#[component]
pub fn WebsiteList(
    /// Section heading.
    title: &'static str,
    /// Websites of this group, in backend order.
    websites: Vec<WebsiteRecord>,
    /// Message shown instead of the list when there is nothing to show.
    empty_message: Option<&'static str>,
    /// Invoked with the id of the website to check.
    #[prop(into)]
    on_check: Callback<WebsiteId>,
    /// Invoked with the id of the website to remove.
    #[prop(into)]
    on_remove: Callback<WebsiteId>,
) -> impl IntoView {
    let body = if let Some(message) = empty_message {
        view! { <p class="empty-message">{message}</p> }.into_any()
    } else {
        view! {
            <ul class="website-list">
                {websites.into_iter().map(|website| {
                    view! { <WebsiteItem website on_check on_remove/> }
                }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section>
            <h2>{title}</h2>
            {body}
        </section>
    }
}

/// A single website row with its status and actions.
#[component]
fn WebsiteItem(
    /// The website to display.
    website: WebsiteRecord,
    #[prop(into)] on_check: Callback<WebsiteId>,
    #[prop(into)] on_remove: Callback<WebsiteId>,
) -> impl IntoView {
    let status = website.status();
    let status_class = format!("status {}", status.css_class());
    let last_checked = website.last_checked_label(now());
    let status_code = website
        .last_status_code
        .map(|code| format!("HTTP {code}"));
    let name = website.display_name().to_string();
    let url = website.url;
    let check_id = website.id.clone();
    let remove_id = website.id;

    view! {
        <li class="website-item">
            <div class="website-info">
                <h3>{name}</h3>
                <a class="website-url" href=url.clone() target="_blank" rel="noopener">{url.clone()}</a>
                <p class="last-checked">"Last checked: " {last_checked}</p>
                <p class=status_class>
                    {status.to_string()}
                    {status_code.map(|code| view! { <span class="status-code">{code}</span> })}
                </p>
            </div>
            <div class="website-actions">
                <button class="btn-check" on:click=move |_| on_check.run(check_id.clone())>
                    "Check Now"
                </button>
                <a class="btn-visit" href=url target="_blank" rel="noopener">"Visit"</a>
                <button class="btn-remove" on:click=move |_| on_remove.run(remove_id.clone())>
                    "Remove"
                </button>
            </div>
        </li>
    }
}
