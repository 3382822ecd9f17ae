//! Terminal adapters for the view and prompt ports.

use std::fmt::Write as _;
use std::io::{self, BufRead, BufReader, Stdin, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use sitewatch_app::ports::{DashboardView, UserPrompt};
use sitewatch_domain::action::CHECK_ALL_BUSY_LABEL;
use sitewatch_domain::board::Board;
use sitewatch_domain::time::{Timestamp, now};
use sitewatch_domain::website::{Group, WebsiteRecord};

/// Render `board` as plain text, relative times computed against `now`.
#[must_use]
pub fn render_board(board: &Board, now: Timestamp) -> String {
    let mut out = String::new();
    for (group, title) in [
        (Group::Changed, "Changed websites"),
        (Group::Unchanged, "Unchanged websites"),
    ] {
        let sites = board.group(group);
        let _ = writeln!(out, "{title} ({})", sites.len());
        if let Some(message) = board.empty_message(group) {
            let _ = writeln!(out, "  {message}");
        }
        for site in sites {
            render_site(&mut out, site, now);
        }
    }
    out
}

fn render_site(out: &mut String, site: &WebsiteRecord, now: Timestamp) {
    let _ = writeln!(out, "  [{}] {}  {}", site.id, site.display_name(), site.url);
    let status = site.status();
    let _ = write!(
        out,
        "      Last checked: {}  Status: {status}",
        site.last_checked_label(now)
    );
    if let Some(code) = site.last_status_code {
        let _ = write!(out, " (HTTP {code})");
    }
    out.push('\n');
}

/// [`DashboardView`] writing the board to a text stream.
pub struct TerminalView<W> {
    out: Mutex<W>,
}

impl TerminalView<Stdout> {
    /// View printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> DashboardView for TerminalView<W> {
    fn render(&self, board: &Board) {
        self.write(&render_board(board, now()));
    }

    fn set_check_all_busy(&self, busy: bool) {
        if busy {
            self.write(&format!("{CHECK_ALL_BUSY_LABEL}\n"));
        }
    }

    fn reset_add_form(&self) {
        tracing::debug!("no form to reset in terminal mode");
    }
}

/// [`UserPrompt`] on a terminal: notices go to `err`, answers are read from `input`.
pub struct TerminalPrompt<R, W> {
    input: Mutex<R>,
    err: Mutex<W>,
    assume_yes: bool,
}

impl TerminalPrompt<BufReader<Stdin>, Stderr> {
    /// Prompt on stdin/stderr. With `assume_yes` every question is confirmed.
    #[must_use]
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, err: W, assume_yes: bool) -> Self {
        Self {
            input: Mutex::new(input),
            err: Mutex::new(err),
            assume_yes,
        }
    }

    fn write(&self, text: &str) {
        let mut err = self.err.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(io_err) = err.write_all(text.as_bytes()).and_then(|()| err.flush()) {
            tracing::warn!(error = %io_err, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn notify(&self, message: &str) {
        self.write(&format!("{message}\n"));
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.write(&format!("{question} [y/N] "));

        let mut answer = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(&mut answer);
        match read {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}
