//! Query synchronizer: keeps listing state, the address bar and the fetched
//! result set consistent.
//!
//! `QuerySync` is a plain state machine. It never performs I/O itself:
//! - every state change hands back a [`FetchTicket`] the caller must run
//! - results are fed back through [`QuerySync::complete`]
//! - tickets carry a sequence number, so a response for a superseded state
//!   is discarded no matter when it arrives

use core::fmt;

use crate::query::{QueryChange, QueryState};

/// Request to fetch the listing for a specific state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: QueryState,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// State snapshot the fetch must use.
    pub fn query(&self) -> &QueryState {
        &self.query
    }
}

/// Outcome of a state change: the URL to put in the address bar (replacing
/// the current history entry) and the fetch to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub url: String,
    pub ticket: FetchTicket,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result belongs to the latest state and was stored.
    Applied,
    /// A newer state change exists; the result was dropped.
    Stale,
}

/// Listing state plus the last applied fetch result.
#[derive(Debug, Clone)]
pub struct QuerySync<T> {
    query: QueryState,
    latest: u64,
    items: Vec<T>,
    error: Option<String>,
    loading: bool,
}

impl<T> QuerySync<T> {
    /// Seed from the current URL query string and issue the initial fetch.
    pub fn from_query_string(query: &str) -> (Self, FetchTicket) {
        let mut sync = Self {
            query: QueryState::decode(query),
            latest: 0,
            items: Vec::new(),
            error: None,
            loading: false,
        };
        let ticket = sync.issue();
        (sync, ticket)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Items from the most recent successful fetch.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Message of the latest failed fetch, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the latest ticket is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply a user edit.
    ///
    /// Returns `None` when the edit leaves the state unchanged; nothing needs
    /// to be fetched or rewritten then.
    pub fn apply(&mut self, change: QueryChange) -> Option<Transition> {
        let next = self.query.apply(change);
        if next == self.query {
            return None;
        }

        self.query = next;
        let ticket = self.issue();
        Some(Transition {
            url: self.query.href(),
            ticket,
        })
    }

    /// Adopt a URL that changed outside the synchronizer (header search,
    /// back/forward navigation). The page number is taken as-is.
    pub fn follow_url(&mut self, query: &str) -> Option<FetchTicket> {
        let next = QueryState::decode(query);
        if next == self.query {
            return None;
        }

        self.query = next;
        Some(self.issue())
    }

    /// Re-run the fetch for the current state.
    pub fn retry(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Feed back the result of a fetch.
    ///
    /// A failure keeps the previous items in place.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<T>, E>,
    ) -> Completion {
        if ticket.seq != self.latest {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest,
                "discarding stale listing response"
            );
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(seq = ticket.seq, count = items.len(), "listing updated");
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(seq = ticket.seq, error = %err, "listing fetch failed");
                self.error = Some(err.to_string());
            }
        }
        Completion::Applied
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        tracing::debug!(seq = self.latest, query = %self.query.encode(), "listing fetch scheduled");
        FetchTicket {
            seq: self.latest,
            query: self.query.clone(),
        }
    }
}
