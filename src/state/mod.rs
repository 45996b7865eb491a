//! Search state machine
//!
//! The locator page keeps its loading flag, error message and result list in
//! one explicit record with pure transition functions, so the
//! Idle/Searching/Resolved cycle is testable without a renderer.

use crate::api::NearbyReply;
use crate::types::Agency;

/// Fixed user-facing message for any transport or decode failure. The
/// underlying cause is logged, never shown.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data.";

/// How one search attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The backend answered with agency rows (possibly none).
    Found(Vec<Agency>),
    /// The backend answered with an `error` message, shown verbatim.
    Rejected(String),
    /// The request or its decoding failed.
    Failed,
}

impl From<NearbyReply> for SearchOutcome {
    fn from(reply: NearbyReply) -> Self {
        match reply {
            NearbyReply::Agencies(agencies) => SearchOutcome::Found(agencies),
            NearbyReply::Rejected(message) => SearchOutcome::Rejected(message),
        }
    }
}

/// The locator page's search state.
///
/// Idle: `loading` false. Searching: `loading` true with cleared error and
/// results. Resolved: one of the three [`SearchOutcome`]s applied, `loading`
/// false again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<Agency>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl SearchState {
    /// Enter the Searching phase and return a ticket for this attempt.
    ///
    /// Stale results and errors are cleared immediately so they never stay
    /// visible while a new request is in flight.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.results.clear();
        self.issued += 1;
        self.issued
    }

    /// Apply a resolution for the attempt identified by `ticket`.
    ///
    /// Only the most recently issued ticket is honored; a response that
    /// arrives after a newer search began is discarded, so completions can
    /// never be applied out of order.
    pub fn resolve(&mut self, ticket: u64, outcome: SearchOutcome) {
        if ticket != self.issued {
            tracing::debug!(ticket, current = self.issued, "discarding stale search response");
            return;
        }

        match outcome {
            SearchOutcome::Found(agencies) => self.results = agencies,
            SearchOutcome::Rejected(message) => self.error = Some(message),
            SearchOutcome::Failed => self.error = Some(FETCH_FAILED_MESSAGE.to_string()),
        }
        self.loading = false;
    }
}
