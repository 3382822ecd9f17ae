//! Blocking browser dialogs used for notices and confirmations.

/// Show `message` in an alert box.
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("no window to show notice: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        leptos::logging::warn!("failed to show alert: {err:?}");
    }
}

/// Ask `question` in a confirm box. Any failure counts as a refusal.
pub fn confirm(question: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}
