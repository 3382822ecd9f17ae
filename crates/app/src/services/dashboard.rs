//! Dashboard controller — keeps the rendered board in sync with the backend.
//!
//! Every mutating action is fire-then-reload: nothing is updated locally,
//! the board is always re-fetched. Overlapping loads are ordered by a
//! [`RefreshSequence`] so an older response never replaces a newer one.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub use sitewatch_domain::action::CheckAllSummary;
use sitewatch_domain::action::{Action, CONFIRM_REMOVE};
use sitewatch_domain::board::Board;
use sitewatch_domain::error::SiteWatchError;
use sitewatch_domain::form::AddWebsiteForm;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::refresh::RefreshSequence;

use crate::ports::{DashboardView, UserPrompt, WebsiteApi};

/// Interval between two automatic refreshes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Shortest accepted refresh interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Application service driving one dashboard.
///
/// Owns the backend client, the view and the prompt, plus the poll task
/// started by [`start`](Self::start).
pub struct DashboardController<A, V, P> {
    api: A,
    view: V,
    prompt: P,
    poll_interval: Duration,
    sequence: RefreshSequence,
    /// Held across commit and render so renders happen in ticket order.
    render_lock: Mutex<()>,
    poller: Mutex<Option<JoinHandle<()>>>,
}

/// Keeps the check-all control disabled for as long as it lives.
struct BusyGuard<'a, V: DashboardView> {
    view: &'a V,
}

impl<'a, V: DashboardView> BusyGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_check_all_busy(true);
        Self { view }
    }
}

impl<V: DashboardView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_check_all_busy(false);
    }
}

impl<A, V, P> DashboardController<A, V, P>
where
    A: WebsiteApi,
    V: DashboardView,
    P: UserPrompt,
{
    /// Create a controller polling every [`DEFAULT_POLL_INTERVAL`].
    pub fn new(api: A, view: V, prompt: P) -> Self {
        Self {
            api,
            view,
            prompt,
            poll_interval: DEFAULT_POLL_INTERVAL,
            sequence: RefreshSequence::new(),
            render_lock: Mutex::new(()),
            poller: Mutex::new(None),
        }
    }

    /// Override the refresh interval. Values below [`MIN_POLL_INTERVAL`] are raised to it.
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// Configured refresh interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Fetch the website list and render it.
    ///
    /// A failure leaves the previous rendering untouched. A response that
    /// arrives after a newer load was rendered is discarded.
    ///
    /// # Errors
    ///
    /// Returns the API error after notifying the user.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<(), SiteWatchError> {
        let ticket = self.sequence.begin();
        let websites = self
            .api
            .list_websites()
            .await
            .inspect_err(|err| self.report(Action::Load, err))?;

        let _render = self
            .render_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.sequence.commit(ticket) {
            let board = Board::from_records(websites);
            tracing::debug!(
                changed = board.changed.len(),
                unchanged = board.unchanged.len(),
                "rendering board"
            );
            self.view.render(&board);
        } else {
            tracing::debug!(?ticket, "discarding stale website list");
        }
        Ok(())
    }

    /// Validate the form, create the website, then reset the form and reload.
    ///
    /// # Errors
    ///
    /// Returns [`SiteWatchError::Validation`] without any network call when
    /// the form is invalid, or the API error when creation fails. Both are
    /// shown to the user first; the form is left untouched on failure.
    #[tracing::instrument(skip(self, form), fields(url = %form.url))]
    pub async fn add_website(&self, form: AddWebsiteForm) -> Result<(), SiteWatchError> {
        let request = form
            .into_request()
            .inspect_err(|err| self.prompt.notify(&err.to_string()))?;

        self.api
            .create_website(&request)
            .await
            .inspect_err(|err| self.report(Action::Add, err))?;

        tracing::info!(name = %request.name, "website added");
        self.view.reset_add_form();
        self.reload().await;
        Ok(())
    }

    /// Ask for confirmation, then delete the website and reload.
    ///
    /// Returns `Ok(false)` when the user declined; no request is sent then.
    ///
    /// # Errors
    ///
    /// Returns the API error after notifying the user.
    #[tracing::instrument(skip(self))]
    pub async fn remove_website(&self, id: &WebsiteId) -> Result<bool, SiteWatchError> {
        if !self.prompt.confirm(CONFIRM_REMOVE) {
            tracing::debug!("removal cancelled");
            return Ok(false);
        }

        self.api
            .delete_website(id)
            .await
            .inspect_err(|err| self.report(Action::Remove, err))?;

        tracing::info!("website removed");
        self.reload().await;
        Ok(true)
    }

    /// Trigger a check of one website, then reload.
    ///
    /// # Errors
    ///
    /// Returns the API error after notifying the user.
    #[tracing::instrument(skip(self))]
    pub async fn check_website(&self, id: &WebsiteId) -> Result<(), SiteWatchError> {
        self.api
            .check_website(id)
            .await
            .inspect_err(|err| self.report(Action::Check, err))?;

        self.reload().await;
        Ok(())
    }

    /// Check every website concurrently, wait for all of them, then reload.
    ///
    /// The check-all control is disabled for the whole operation and
    /// restored on every exit path. Individual check failures do not stop
    /// the reload; they are reported once afterwards.
    ///
    /// # Errors
    ///
    /// Returns the API error when the website list could not be fetched.
    #[tracing::instrument(skip(self))]
    pub async fn check_all(&self) -> Result<CheckAllSummary, SiteWatchError> {
        let _busy = BusyGuard::engage(&self.view);

        let websites = self
            .api
            .list_websites()
            .await
            .inspect_err(|err| self.report(Action::CheckAll, err))?;

        let results = join_all(
            websites
                .iter()
                .map(|website| self.api.check_website(&website.id)),
        )
        .await;

        for (website, result) in websites.iter().zip(&results) {
            if let Err(err) = result {
                tracing::warn!(id = %website.id, error = %err, "check failed");
            }
        }

        self.reload().await;

        let summary = CheckAllSummary::from_results(&results);
        if let Some(notice) = summary.notice() {
            self.prompt.notify(notice);
        }
        tracing::info!(
            checked = summary.checked,
            failed = summary.failed,
            "check-all finished"
        );
        Ok(summary)
    }

    async fn reload(&self) {
        // Load failures are already reported to the user.
        let _ = self.load().await;
    }

    fn report(&self, action: Action, err: &SiteWatchError) {
        tracing::warn!(%action, error = %err, "dashboard action failed");
        self.prompt.notify(action.failure_message());
    }
}

impl<A, V, P> DashboardController<A, V, P>
where
    A: WebsiteApi + Send + Sync + 'static,
    V: DashboardView + Send + Sync + 'static,
    P: UserPrompt + Send + Sync + 'static,
{
    /// Spawn the poll task: one load immediately, then one per interval.
    ///
    /// Calling `start` again replaces the running task. The task only holds
    /// a weak reference and ends once the controller is dropped.
    pub fn start(self: &Arc<Self>) {
        let weak: Weak<Self> = Arc::downgrade(self);
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let handle = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                let Some(controller) = weak.upgrade() else {
                    break;
                };
                controller.reload().await;
            }
        });

        let previous = self
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
        tracing::info!(interval = ?self.poll_interval, "dashboard polling started");
    }

    /// Stop the poll task. Actions already in flight still complete.
    pub fn stop(&self) {
        let handle = self
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
            tracing::info!("dashboard polling stopped");
        }
    }

    /// Whether the poll task is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A, V, P> Drop for DashboardController<A, V, P> {
    fn drop(&mut self) {
        let handle = self
            .poller
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewatch_domain::board::EMPTY_BOARD_MESSAGE;
    use sitewatch_domain::error::{ApiError, ValidationError};
    use sitewatch_domain::form::NewWebsite;
    use sitewatch_domain::website::{Group, WebsiteRecord};
    use std::collections::{HashSet, VecDeque};
    use std::future::Future;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;
    use tokio::sync::oneshot;

    fn site(id: u64, has_changed: bool) -> WebsiteRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "url": format!("https://site{id}.example"),
            "hasChanged": has_changed,
        }))
        .unwrap()
    }

    #[derive(Default)]
    struct FakeApi {
        websites: Mutex<Vec<WebsiteRecord>>,
        fail_list: AtomicBool,
        fail_create: AtomicBool,
        fail_delete: AtomicBool,
        failing_checks: Mutex<HashSet<WebsiteId>>,
        gates: Mutex<VecDeque<oneshot::Receiver<Vec<WebsiteRecord>>>>,
        list_calls: AtomicUsize,
        created: Mutex<Vec<NewWebsite>>,
        deleted: Mutex<Vec<WebsiteId>>,
        checked: Mutex<Vec<WebsiteId>>,
    }

    impl FakeApi {
        fn with_websites(websites: Vec<WebsiteRecord>) -> Arc<Self> {
            let api = Self::default();
            *api.websites.lock().unwrap() = websites;
            Arc::new(api)
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    fn status_error() -> SiteWatchError {
        ApiError::Status(500).into()
    }

    impl WebsiteApi for FakeApi {
        fn list_websites(
            &self,
        ) -> impl Future<Output = Result<Vec<WebsiteRecord>, SiteWatchError>> + Send {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let gate = self.gates.lock().unwrap().pop_front();
            let result = if self.fail_list.load(Ordering::SeqCst) {
                Err(status_error())
            } else {
                Ok(self.websites.lock().unwrap().clone())
            };
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .map_err(|_| ApiError::Transport("gate dropped".into()).into()),
                    None => result,
                }
            }
        }

        fn create_website(
            &self,
            website: &NewWebsite,
        ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
            let result = if self.fail_create.load(Ordering::SeqCst) {
                Err(status_error())
            } else {
                self.created.lock().unwrap().push(website.clone());
                Ok(())
            };
            async move { result }
        }

        fn delete_website(
            &self,
            id: &WebsiteId,
        ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
            let result = if self.fail_delete.load(Ordering::SeqCst) {
                Err(status_error())
            } else {
                self.deleted.lock().unwrap().push(id.clone());
                self.websites.lock().unwrap().retain(|w| &w.id != id);
                Ok(())
            };
            async move { result }
        }

        fn check_website(
            &self,
            id: &WebsiteId,
        ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
            self.checked.lock().unwrap().push(id.clone());
            let result = if self.failing_checks.lock().unwrap().contains(id) {
                Err(status_error())
            } else {
                Ok(())
            };
            async move { result }
        }
    }

    #[derive(Default)]
    struct RecordingView {
        renders: Mutex<Vec<Board>>,
        busy: Mutex<Vec<bool>>,
        resets: AtomicUsize,
    }

    impl RecordingView {
        fn last_render(&self) -> Option<Board> {
            self.renders.lock().unwrap().last().cloned()
        }

        fn render_count(&self) -> usize {
            self.renders.lock().unwrap().len()
        }
    }

    impl DashboardView for RecordingView {
        fn render(&self, board: &Board) {
            self.renders.lock().unwrap().push(board.clone());
        }

        fn set_check_all_busy(&self, busy: bool) {
            self.busy.lock().unwrap().push(busy);
        }

        fn reset_add_form(&self) {
            self.resets.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct ScriptedPrompt {
        answer: bool,
        notices: Mutex<Vec<String>>,
        questions: Mutex<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Arc<Self> {
            Arc::new(Self {
                answer,
                notices: Mutex::new(Vec::new()),
                questions: Mutex::new(Vec::new()),
            })
        }

        fn notices(&self) -> Vec<String> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }

        fn confirm(&self, question: &str) -> bool {
            self.questions.lock().unwrap().push(question.to_string());
            self.answer
        }
    }

    type Controller = DashboardController<Arc<FakeApi>, Arc<RecordingView>, Arc<ScriptedPrompt>>;

    struct Harness {
        api: Arc<FakeApi>,
        view: Arc<RecordingView>,
        prompt: Arc<ScriptedPrompt>,
        controller: Arc<Controller>,
    }

    fn harness(websites: Vec<WebsiteRecord>, confirm: bool) -> Harness {
        let api = FakeApi::with_websites(websites);
        let view = Arc::new(RecordingView::default());
        let prompt = ScriptedPrompt::answering(confirm);
        let controller = Arc::new(DashboardController::new(
            Arc::clone(&api),
            Arc::clone(&view),
            Arc::clone(&prompt),
        ));
        Harness {
            api,
            view,
            prompt,
            controller,
        }
    }

    fn valid_form() -> AddWebsiteForm {
        AddWebsiteForm {
            url: "https://new.example".to_string(),
            ..AddWebsiteForm::default()
        }
    }

    #[tokio::test]
    async fn should_render_grouped_board_on_load() {
        let h = harness(vec![site(1, true), site(2, false)], true);

        h.controller.load().await.unwrap();

        let board = h.view.last_render().unwrap();
        assert_eq!(board.group(Group::Changed).len(), 1);
        assert_eq!(board.group(Group::Unchanged).len(), 1);
    }

    #[tokio::test]
    async fn should_render_empty_board() {
        let h = harness(vec![], true);

        h.controller.load().await.unwrap();

        let board = h.view.last_render().unwrap();
        assert_eq!(board.empty_message(Group::Changed), Some(EMPTY_BOARD_MESSAGE));
    }

    #[tokio::test]
    async fn should_keep_previous_render_and_notify_when_load_fails() {
        let h = harness(vec![site(1, false)], true);
        h.controller.load().await.unwrap();

        h.api.fail_list.store(true, Ordering::SeqCst);
        let result = h.controller.load().await;

        assert!(result.is_err());
        assert_eq!(h.view.render_count(), 1);
        assert_eq!(h.prompt.notices(), vec![Action::Load.failure_message()]);
    }

    #[tokio::test]
    async fn should_discard_stale_load_response() {
        let h = harness(vec![], true);
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        h.api.gates.lock().unwrap().extend([older_rx, newer_rx]);

        let c = Arc::clone(&h.controller);
        let older = tokio::spawn(async move { c.load().await });
        tokio::task::yield_now().await;
        let c = Arc::clone(&h.controller);
        let newer = tokio::spawn(async move { c.load().await });
        tokio::task::yield_now().await;

        newer_tx.send(vec![site(2, true)]).unwrap();
        newer.await.unwrap().unwrap();
        older_tx.send(vec![site(1, false)]).unwrap();
        older.await.unwrap().unwrap();

        assert_eq!(h.view.render_count(), 1);
        let board = h.view.last_render().unwrap();
        assert_eq!(board.changed[0].id, WebsiteId::from(2));
    }

    #[tokio::test]
    async fn should_block_blank_url_without_network_call() {
        let h = harness(vec![], true);

        let result = h.controller.add_website(AddWebsiteForm::default()).await;

        assert_eq!(
            result,
            Err(SiteWatchError::Validation(ValidationError::MissingUrl))
        );
        assert!(h.api.created.lock().unwrap().is_empty());
        assert_eq!(h.api.list_calls(), 0);
        assert_eq!(h.prompt.notices(), vec!["Please enter a valid URL"]);
    }

    #[tokio::test]
    async fn should_block_unpaired_certificate_without_network_call() {
        let h = harness(vec![], true);
        let mut form = valid_form();
        form.use_pki = true;
        form.client_cert_path = "client.pem".to_string();

        let result = h.controller.add_website(form).await;

        assert!(matches!(
            result,
            Err(SiteWatchError::Validation(
                ValidationError::UnpairedClientCertificate
            ))
        ));
        assert!(h.api.created.lock().unwrap().is_empty());
        assert_eq!(h.api.list_calls(), 0);
    }

    #[tokio::test]
    async fn should_create_reset_form_and_reload_on_add() {
        let h = harness(vec![], true);

        h.controller.add_website(valid_form()).await.unwrap();

        let created = h.api.created.lock().unwrap().clone();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "https://new.example");
        assert_eq!(h.view.resets.load(Ordering::SeqCst), 1);
        assert_eq!(h.api.list_calls(), 1);
    }

    #[tokio::test]
    async fn should_leave_form_untouched_when_add_fails() {
        let h = harness(vec![], true);
        h.api.fail_create.store(true, Ordering::SeqCst);

        let result = h.controller.add_website(valid_form()).await;

        assert!(result.is_err());
        assert_eq!(h.view.resets.load(Ordering::SeqCst), 0);
        assert_eq!(h.api.list_calls(), 0);
        assert_eq!(h.prompt.notices(), vec![Action::Add.failure_message()]);
    }

    #[tokio::test]
    async fn should_not_delete_when_confirmation_declined() {
        let h = harness(vec![site(1, false)], false);

        let removed = h.controller.remove_website(&WebsiteId::from(1)).await.unwrap();

        assert!(!removed);
        assert!(h.api.deleted.lock().unwrap().is_empty());
        assert_eq!(
            h.prompt.questions.lock().unwrap().clone(),
            vec![CONFIRM_REMOVE]
        );

        h.controller.load().await.unwrap();
        assert_eq!(h.view.last_render().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_and_reload_when_confirmed() {
        let h = harness(vec![site(1, false), site(2, false)], true);

        let removed = h.controller.remove_website(&WebsiteId::from(1)).await.unwrap();

        assert!(removed);
        assert_eq!(
            h.api.deleted.lock().unwrap().clone(),
            vec![WebsiteId::from(1)]
        );
        assert_eq!(h.view.last_render().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_notify_when_delete_fails() {
        let h = harness(vec![site(1, false)], true);
        h.api.fail_delete.store(true, Ordering::SeqCst);

        let result = h.controller.remove_website(&WebsiteId::from(1)).await;

        assert!(result.is_err());
        assert_eq!(h.prompt.notices(), vec![Action::Remove.failure_message()]);
        assert_eq!(h.api.list_calls(), 0);
    }

    #[tokio::test]
    async fn should_check_one_website_and_reload() {
        let h = harness(vec![site(1, false)], true);

        h.controller.check_website(&WebsiteId::from(1)).await.unwrap();

        assert_eq!(h.api.checked.lock().unwrap().clone(), vec![WebsiteId::from(1)]);
        assert_eq!(h.api.list_calls(), 1);
    }

    #[tokio::test]
    async fn should_notify_when_single_check_fails() {
        let h = harness(vec![site(1, false)], true);
        h.api
            .failing_checks
            .lock()
            .unwrap()
            .insert(WebsiteId::from(1));

        let result = h.controller.check_website(&WebsiteId::from(1)).await;

        assert!(result.is_err());
        assert_eq!(h.prompt.notices(), vec![Action::Check.failure_message()]);
    }

    #[tokio::test]
    async fn should_check_every_website_and_restore_control() {
        let h = harness(vec![site(1, false), site(2, true), site(3, false)], true);

        let summary = h.controller.check_all().await.unwrap();

        assert_eq!(
            summary,
            CheckAllSummary {
                checked: 3,
                failed: 0
            }
        );
        assert_eq!(h.api.checked.lock().unwrap().len(), 3);
        assert_eq!(h.api.list_calls(), 2);
        assert_eq!(h.view.busy.lock().unwrap().clone(), vec![true, false]);
        assert!(h.prompt.notices().is_empty());
    }

    #[tokio::test]
    async fn should_reload_and_restore_control_when_some_checks_fail() {
        let h = harness(vec![site(1, false), site(2, false)], true);
        h.api
            .failing_checks
            .lock()
            .unwrap()
            .insert(WebsiteId::from(2));

        let summary = h.controller.check_all().await.unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(h.api.checked.lock().unwrap().len(), 2);
        assert_eq!(h.view.render_count(), 1);
        assert_eq!(h.view.busy.lock().unwrap().clone(), vec![true, false]);
        assert_eq!(h.prompt.notices(), vec![Action::CheckAll.failure_message()]);
    }

    #[tokio::test]
    async fn should_restore_control_when_listing_fails_during_check_all() {
        let h = harness(vec![site(1, false)], true);
        h.api.fail_list.store(true, Ordering::SeqCst);

        let result = h.controller.check_all().await;

        assert!(result.is_err());
        assert!(h.api.checked.lock().unwrap().is_empty());
        assert_eq!(h.view.busy.lock().unwrap().clone(), vec![true, false]);
        assert_eq!(h.prompt.notices(), vec![Action::CheckAll.failure_message()]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_until_stopped() {
        let h = harness(vec![site(1, false)], true);

        h.controller.start();
        assert!(h.controller.is_running());
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.api.list_calls(), 1);

        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
        assert_eq!(h.api.list_calls(), 2);

        h.controller.stop();
        assert!(!h.controller.is_running());
        tokio::time::sleep(DEFAULT_POLL_INTERVAL * 3).await;
        assert_eq!(h.api.list_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_polling_when_controller_dropped() {
        let h = harness(vec![site(1, false)], true);
        let weak = Arc::downgrade(&h.controller);

        h.controller.start();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(h.api.list_calls(), 1);

        drop(h.controller);
        tokio::time::sleep(DEFAULT_POLL_INTERVAL * 3).await;

        assert_eq!(weak.strong_count(), 0);
        assert_eq!(h.api.list_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_raise_zero_poll_interval_to_minimum() {
        let h = harness(vec![], true);
        let controller = Arc::new(
            DashboardController::new(
                Arc::clone(&h.api),
                Arc::clone(&h.view),
                Arc::clone(&h.prompt),
            )
            .with_poll_interval(Duration::ZERO),
        );
        assert_eq!(controller.poll_interval(), MIN_POLL_INTERVAL);

        controller.start();
        tokio::time::sleep(MIN_POLL_INTERVAL * 2 + Duration::from_millis(1)).await;

        assert!(controller.is_running());
        assert_eq!(h.api.list_calls(), 3);
        controller.stop();
    }

    /// Blocks inside its first render until released.
    struct SlowFirstRenderView {
        inner: RecordingView,
        entered: Mutex<Option<mpsc::Sender<()>>>,
        release: Mutex<Option<mpsc::Receiver<()>>>,
    }

    impl DashboardView for SlowFirstRenderView {
        fn render(&self, board: &Board) {
            if let Some(entered) = self.entered.lock().unwrap().take() {
                entered.send(()).unwrap();
                let release = self.release.lock().unwrap().take().unwrap();
                release.recv().unwrap();
            }
            self.inner.render(board);
        }

        fn set_check_all_busy(&self, busy: bool) {
            self.inner.set_check_all_busy(busy);
        }

        fn reset_add_form(&self) {
            self.inner.reset_add_form();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn should_keep_newest_board_when_renders_overlap() {
        let api = Arc::new(FakeApi::default());
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        api.gates.lock().unwrap().extend([first_rx, second_rx]);
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let view = Arc::new(SlowFirstRenderView {
            inner: RecordingView::default(),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
        });
        let controller = Arc::new(DashboardController::new(
            Arc::clone(&api),
            Arc::clone(&view),
            ScriptedPrompt::answering(true),
        ));

        let first = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.load().await }
        });
        while api.list_calls() < 1 {
            tokio::task::yield_now().await;
        }
        let second = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.load().await }
        });
        while api.list_calls() < 2 {
            tokio::task::yield_now().await;
        }

        // The older load starts rendering, then the newer response arrives.
        first_tx.send(vec![site(1, false)]).unwrap();
        tokio::task::spawn_blocking(move || entered_rx.recv())
            .await
            .unwrap()
            .unwrap();
        second_tx.send(vec![site(2, false)]).unwrap();
        tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_millis(50)))
            .await
            .unwrap();
        release_tx.send(()).unwrap();

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        let board = view.inner.last_render().unwrap();
        assert_eq!(board.unchanged[0].id, WebsiteId::from(2));
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_poll_task_when_started_twice() {
        let h = harness(vec![], true);
        let controller = Arc::new(
            DashboardController::new(
                Arc::clone(&h.api),
                Arc::clone(&h.view),
                Arc::clone(&h.prompt),
            )
            .with_poll_interval(Duration::from_secs(10)),
        );

        controller.start();
        controller.start();
        tokio::time::sleep(Duration::from_secs(25)).await;
        controller.stop();

        // The first task is aborted before it ever runs.
        assert_eq!(h.api.list_calls(), 3);
    }
}
