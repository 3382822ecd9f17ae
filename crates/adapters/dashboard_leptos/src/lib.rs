//! Browser dashboard for the website change monitor.
//!
//! Client-side rendered Leptos app talking to `/api/websites` on the origin
//! that serves it.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod browser;
mod components;
mod pages;

use pages::{Dashboard, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}
