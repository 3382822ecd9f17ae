//! Website — a URL the backend monitors for content changes.
//!
//! [`WebsiteRecord`] mirrors the backend's JSON shape. The backend owns it;
//! the dashboard only reads it and derives display state from it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::WebsiteId;
use crate::time::{Timestamp, format_relative};

/// Label shown when a website has never been checked.
pub const NOT_YET_CHECKED: &str = "Not yet checked";

/// A monitored website as returned by `GET /api/websites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteRecord {
    pub id: WebsiteId,
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "usePKI")]
    pub use_pki: bool,
    #[serde(default)]
    pub client_cert_path: String,
    #[serde(default)]
    pub client_key_path: String,
    #[serde(default, rename = "customRootCAPath")]
    pub custom_root_ca_path: String,
    #[serde(default, rename = "skipTLSVerify")]
    pub skip_tls_verify: bool,
    /// `None` when the site has never been checked.
    #[serde(default, deserialize_with = "checked_at")]
    pub last_checked: Option<Timestamp>,
    #[serde(default)]
    pub has_changed: bool,
    #[serde(default)]
    pub is_first_check: bool,
    /// HTTP status of the last check, when known.
    #[serde(default, deserialize_with = "status_code")]
    pub last_status_code: Option<u16>,
    /// Failure of the last check, if any.
    #[serde(default, deserialize_with = "non_empty")]
    pub error: Option<String>,
}

/// Which of the two dashboard lists a website belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Errored or changed since the previous check.
    Changed,
    /// Everything else, including sites awaiting their first check.
    Unchanged,
}

/// Display status of a website, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebsiteStatus {
    Error(String),
    PendingFirstCheck,
    Changed,
    Unchanged,
}

impl WebsiteRecord {
    /// Label to display: the name, or the URL when no name was given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.url
        } else {
            &self.name
        }
    }

    /// Group membership: errored or changed sites go to [`Group::Changed`].
    #[must_use]
    pub fn group(&self) -> Group {
        if self.error.is_some() || self.has_changed {
            Group::Changed
        } else {
            Group::Unchanged
        }
    }

    /// Current status; an error always wins over the check flags.
    #[must_use]
    pub fn status(&self) -> WebsiteStatus {
        if let Some(err) = &self.error {
            WebsiteStatus::Error(err.clone())
        } else if self.is_first_check {
            WebsiteStatus::PendingFirstCheck
        } else if self.has_changed {
            WebsiteStatus::Changed
        } else {
            WebsiteStatus::Unchanged
        }
    }

    /// Human description of when the site was last checked.
    #[must_use]
    pub fn last_checked_label(&self, now: Timestamp) -> String {
        self.last_checked.map_or_else(
            || NOT_YET_CHECKED.to_string(),
            |ts| format_relative(ts, now),
        )
    }
}

impl WebsiteStatus {
    /// CSS class applied to the status element (empty for pending).
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::PendingFirstCheck => "",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(err) => write!(f, "Error: {err}"),
            Self::PendingFirstCheck => f.write_str("Pending first check"),
            Self::Changed => f.write_str("Changed since last check"),
            Self::Unchanged => f.write_str("No changes detected"),
        }
    }
}

/// Timestamps at or before the Unix epoch mean "never checked".
fn checked_at<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
    let ts = Option::<Timestamp>::deserialize(deserializer)?;
    Ok(ts.filter(|ts| ts.timestamp_millis() > 0))
}

fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    let code = Option::<u16>::deserialize(deserializer)?;
    Ok(code.filter(|code| *code != 0))
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|text| !text.is_empty()))
}
