use std::time::Duration;

use tracing::{debug, warn};

use crate::managers::ResultsTable;
use crate::models::Song;

/// What the UI has to do after the query text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Query became empty; the table is already cleared.
    Cleared,
    /// Start a timer that reports `token` back after `delay`.
    Schedule(ScheduledSearch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSearch {
    pub token: u64,
    pub delay: Duration,
}

/// A request that should be sent now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Debounce and response-ordering state behind the search box.
///
/// At most one timer is pending at a time: each qualifying input bumps the
/// generation token, so a timer that fires with an older token is ignored.
/// Responses carry the sequence number of their request and are only
/// rendered when newer than the last applied one.
#[derive(Debug)]
pub struct SearchSession {
    input: String,
    debounce: Duration,
    pending: Option<(u64, String)>,
    next_token: u64,
    last_issued: u64,
    last_applied: u64,
    table: ResultsTable,
}

impl SearchSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            debounce,
            pending: None,
            next_token: 0,
            last_issued: 0,
            last_applied: 0,
            table: ResultsTable::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    pub fn input_changed(&mut self, text: String) -> InputAction {
        let query = text.trim().to_string();
        self.input = text;
        self.pending = None;

        if query.is_empty() {
            // Anything already in flight is now stale
            self.last_applied = self.last_issued;
            self.table.clear();
            return InputAction::Cleared;
        }

        self.next_token += 1;
        self.pending = Some((self.next_token, query));
        InputAction::Schedule(ScheduledSearch {
            token: self.next_token,
            delay: self.debounce,
        })
    }

    /// Called when a debounce timer elapses. Superseded timers yield nothing.
    pub fn timer_fired(&mut self, token: u64) -> Option<SearchRequest> {
        match self.pending.take() {
            Some((pending_token, query)) if pending_token == token => Some(self.issue(query)),
            other => {
                debug!("Ignoring superseded debounce timer {}", token);
                self.pending = other;
                None
            }
        }
    }

    /// Searches for the current input right away, dropping any pending timer.
    pub fn submit(&mut self) -> Option<SearchRequest> {
        self.pending = None;
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        Some(self.issue(query))
    }

    fn issue(&mut self, query: String) -> SearchRequest {
        self.last_issued += 1;
        SearchRequest {
            seq: self.last_issued,
            query,
        }
    }

    /// Applies a successful response. Returns false if it was stale.
    pub fn results_received(&mut self, seq: u64, songs: Vec<Song>) -> bool {
        if seq <= self.last_applied {
            debug!(
                "Discarding stale response {} (last applied {})",
                seq, self.last_applied
            );
            return false;
        }
        self.last_applied = seq;
        self.table.render(songs);
        true
    }

    /// Failures leave the table untouched.
    pub fn search_failed(&mut self, seq: u64, error: &str) {
        warn!("Search request {} failed: {}", seq, error);
    }
}
