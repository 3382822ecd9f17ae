//! Dashboard actions and the fixed messages the user sees for them.

/// Question asked before a website is removed.
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this website from monitoring?";

/// Label of the check-all control while idle.
pub const CHECK_ALL_LABEL: &str = "Check All Now";

/// Label of the check-all control while checks are running.
pub const CHECK_ALL_BUSY_LABEL: &str = "Checking...";

/// User-triggered (or polled) operations against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Remove,
    Check,
    CheckAll,
}

impl Action {
    /// Static notification shown when the action fails on the backend side.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load websites. Please try again later.",
            Self::Add => "Failed to add website. Please try again.",
            Self::Remove => "Failed to remove website. Please try again.",
            Self::Check => "Failed to check website. Please try again.",
            Self::CheckAll => "Failed to check all websites. Please try again.",
        }
    }
}

/// Tally of one check-all run once every check has settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckAllSummary {
    /// Number of check calls issued.
    pub checked: usize,
    /// Number of those calls that failed.
    pub failed: usize,
}

impl CheckAllSummary {
    /// Count the settled check results.
    #[must_use]
    pub fn from_results<T, E>(results: &[Result<T, E>]) -> Self {
        Self {
            checked: results.len(),
            failed: results.iter().filter(|result| result.is_err()).count(),
        }
    }

    /// The single notice to show after the reload, if any check failed.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        (self.failed > 0).then(|| Action::CheckAll.failure_message())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Add => f.write_str("add"),
            Self::Remove => f.write_str("remove"),
            Self::Check => f.write_str("check"),
            Self::CheckAll => f.write_str("check_all"),
        }
    }
}
