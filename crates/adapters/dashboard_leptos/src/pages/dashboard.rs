//! The monitoring dashboard: both website groups, the add form and check-all.
//!
//! The board is re-fetched after every action and once per minute. Loads
//! may overlap; a [`RefreshSequence`] keeps an older response from
//! replacing a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::join_all;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sitewatch_domain::action::{Action, CONFIRM_REMOVE, CheckAllSummary};
use sitewatch_domain::board::Board;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::refresh::RefreshSequence;
use sitewatch_domain::website::Group;

use crate::components::{AddWebsiteForm, CheckAllButton, WebsiteList};
use crate::{api, browser};

const POLL_INTERVAL_MS: u32 = 60_000;

/// Fetches the board and publishes it, dropping stale responses.
#[derive(Clone)]
struct Loader {
    sequence: Arc<RefreshSequence>,
    set_board: WriteSignal<Option<Board>>,
}

impl Loader {
    async fn load(self) {
        let ticket = self.sequence.begin();
        match api::fetch_websites().await {
            Ok(websites) => {
                if self.sequence.commit(ticket) {
                    self.set_board.set(Some(Board::from_records(websites)));
                }
            }
            // The previous board stays on screen.
            Err(err) => {
                leptos::logging::warn!("failed to load websites: {err}");
                browser::notify(Action::Load.failure_message());
            }
        }
    }

    fn reload(&self) {
        spawn_local(self.clone().load());
    }
}

async fn check_all(loader: Loader) {
    let websites = match api::fetch_websites().await {
        Ok(websites) => websites,
        Err(err) => {
            leptos::logging::warn!("failed to list websites for check-all: {err}");
            browser::notify(Action::CheckAll.failure_message());
            return;
        }
    };

    let results = join_all(
        websites
            .iter()
            .map(|website| api::check_website(&website.id)),
    )
    .await;
    let summary = CheckAllSummary::from_results(&results);

    loader.load().await;
    if let Some(notice) = summary.notice() {
        leptos::logging::warn!("{} of {} checks failed", summary.failed, summary.checked);
        browser::notify(notice);
    }
}

/// Dashboard page.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (board, set_board) = signal(None::<Board>);
    let (checking, set_checking) = signal(false);
    let loader = Loader {
        sequence: Arc::new(RefreshSequence::new()),
        set_board,
    };

    // Poll until the page is unmounted.
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        let loader = loader.clone();
        spawn_local(async move {
            while running.load(Ordering::Relaxed) {
                loader.reload();
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });
    }
    on_cleanup(move || running.store(false, Ordering::Relaxed));

    let on_check = {
        let loader = loader.clone();
        Callback::new(move |id: WebsiteId| {
            let loader = loader.clone();
            spawn_local(async move {
                match api::check_website(&id).await {
                    Ok(()) => loader.load().await,
                    Err(err) => {
                        leptos::logging::warn!("failed to check website {id}: {err}");
                        browser::notify(Action::Check.failure_message());
                    }
                }
            });
        })
    };

    let on_remove = {
        let loader = loader.clone();
        Callback::new(move |id: WebsiteId| {
            if !browser::confirm(CONFIRM_REMOVE) {
                return;
            }
            let loader = loader.clone();
            spawn_local(async move {
                match api::delete_website(&id).await {
                    Ok(()) => loader.load().await,
                    Err(err) => {
                        leptos::logging::warn!("failed to remove website {id}: {err}");
                        browser::notify(Action::Remove.failure_message());
                    }
                }
            });
        })
    };

    let on_added = {
        let loader = loader.clone();
        Callback::new(move |()| loader.reload())
    };

    let on_check_all = Callback::new(move |()| {
        if checking.get_untracked() {
            return;
        }
        set_checking.set(true);
        let loader = loader.clone();
        spawn_local(async move {
            check_all(loader).await;
            set_checking.set(false);
        });
    });

    view! {
        <div class="dashboard">
            <header>
                <h1>"Website Monitor"</h1>
                <CheckAllButton busy=checking on_click=on_check_all/>
            </header>
            <AddWebsiteForm on_added/>
            {move || match board.get() {
                None => view! { <p class="loading">"Loading websites\u{2026}"</p> }.into_any(),
                Some(board) => {
                    let changed_empty = board.empty_message(Group::Changed);
                    let unchanged_empty = board.empty_message(Group::Unchanged);
                    view! {
                        <WebsiteList
                            title="Changed Websites"
                            websites=board.changed
                            empty_message=changed_empty
                            on_check
                            on_remove
                        />
                        <WebsiteList
                            title="Unchanged Websites"
                            websites=board.unchanged
                            empty_message=unchanged_empty
                            on_check
                            on_remove
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
