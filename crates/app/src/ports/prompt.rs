//! Prompt port — blocking interaction with the user.

/// Synchronous notifications and yes/no questions.
pub trait UserPrompt {
    /// Show `message` and wait until the user acknowledges it.
    fn notify(&self, message: &str);

    /// Ask `question`; `true` means the user confirmed.
    fn confirm(&self, question: &str) -> bool;
}

impl<T: UserPrompt> UserPrompt for std::sync::Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }

    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}
