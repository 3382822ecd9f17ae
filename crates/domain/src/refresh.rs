//! Refresh sequencing — keeps overlapping list loads from rendering out of order.
//!
//! Each load takes a ticket before its request goes out. When the response
//! arrives it may only be rendered if no newer ticket has been rendered yet.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket issued to one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Issues tickets and tracks the newest one rendered.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    issued: AtomicU64,
    rendered: AtomicU64,
}

impl RefreshSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Tickets start at 1 and strictly increase.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record `ticket` as rendered if it is newer than every rendered ticket.
    ///
    /// Returns `false` for a stale response, which must be discarded.
    pub fn commit(&self, ticket: RefreshTicket) -> bool {
        self.rendered.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }
}
