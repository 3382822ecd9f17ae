//! Board — the two grouped lists the dashboard renders.

use crate::website::{Group, WebsiteRecord};

/// Shown in both lists when nothing is monitored at all.
pub const EMPTY_BOARD_MESSAGE: &str = "No websites being monitored";
/// Shown in the changed list when no site changed or errored.
pub const NO_CHANGED_MESSAGE: &str = "No changed websites found";
/// Shown in the unchanged list when every site changed or errored.
pub const NO_UNCHANGED_MESSAGE: &str = "No unchanged websites found";

/// Websites split into the changed and unchanged groups.
///
/// Backend order is preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub changed: Vec<WebsiteRecord>,
    pub unchanged: Vec<WebsiteRecord>,
}

impl Board {
    /// Partition `records` by [`WebsiteRecord::group`].
    #[must_use]
    pub fn from_records(records: Vec<WebsiteRecord>) -> Self {
        let (changed, unchanged) = records
            .into_iter()
            .partition(|site| site.group() == Group::Changed);
        Self { changed, unchanged }
    }

    /// Records of one group.
    #[must_use]
    pub fn group(&self, group: Group) -> &[WebsiteRecord] {
        match group {
            Group::Changed => &self.changed,
            Group::Unchanged => &self.unchanged,
        }
    }

    /// Total number of websites on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changed.len() + self.unchanged.len()
    }

    /// Whether the backend returned no websites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Placeholder text for `group`, or `None` when it has members.
    #[must_use]
    pub fn empty_message(&self, group: Group) -> Option<&'static str> {
        if self.is_empty() {
            return Some(EMPTY_BOARD_MESSAGE);
        }
        match group {
            Group::Changed if self.changed.is_empty() => Some(NO_CHANGED_MESSAGE),
            Group::Unchanged if self.unchanged.is_empty() => Some(NO_UNCHANGED_MESSAGE),
            _ => None,
        }
    }
}
