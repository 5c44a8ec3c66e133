//! Search controller: debounced query input, paginated lookups and recent terms.
//!
//! The controller performs no I/O. Operations that need the lookup service
//! return a [`LookupRequest`]; the runtime runs it and feeds the
//! [`LookupOutcome`] back through [`SearchController::complete`]. Each request
//! carries a unique id, and only the outcome of the request currently in
//! flight is applied.

use omdb::{MovieSummary, MAX_PAGE, PAGE_SIZE};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::recents::RecentTerms;
use crate::term_store::TermStore;

mod debounce;
mod request;

use debounce::{DebounceToken, Debouncer};
pub use request::{Applied, LookupKind, LookupOutcome, LookupRequest};

/// Which panel the view should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
    /// No active query: show recents or the static suggestions.
    Suggestions,
    /// First page in flight with nothing to show yet.
    Searching,
    Results,
    /// The last search failed. Authoritative over any stale results.
    NoResults { title: &'a str },
}

#[derive(Debug)]
pub struct SearchController<S> {
    /// Raw input text, echoed as typed.
    query: String,
    /// Trimmed query the current results belong to.
    active_query: String,
    cursor: u32,
    results: Vec<MovieSummary>,
    loading: bool,
    error: bool,
    exhausted: bool,
    recents: RecentTerms<S>,
    debouncer: Debouncer<String>,
    pending_trigger: Option<DebounceToken>,
    in_flight: Option<LookupRequest>,
    next_request_id: u64,
}

impl<S: TermStore> SearchController<S> {
    pub fn new(recents: RecentTerms<S>, debounce: Duration) -> Self {
        Self {
            query: String::new(),
            active_query: String::new(),
            cursor: 1,
            results: Vec::new(),
            loading: false,
            error: false,
            exhausted: false,
            recents,
            debouncer: Debouncer::new(debounce),
            pending_trigger: None,
            in_flight: None,
            next_request_id: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn recents(&self) -> &RecentTerms<S> {
        &self.recents
    }

    /// True while typed input is waiting for the quiet period to elapse.
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending debounce trigger fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn panel(&self) -> Panel<'_> {
        if self.error {
            if self.loading {
                Panel::Searching
            } else {
                Panel::NoResults {
                    title: &self.active_query,
                }
            }
        } else if !self.results.is_empty() {
            Panel::Results
        } else if self.loading {
            Panel::Searching
        } else {
            Panel::Suggestions
        }
    }

    pub fn can_load_more(&self) -> bool {
        !self.active_query.is_empty()
            && !self.results.is_empty()
            && !self.loading
            && !self.exhausted
            && !self.error
            && self.cursor < MAX_PAGE
    }

    /// Record raw input and (re)start the debounce window. Never issues a lookup.
    pub fn on_query_changed(&mut self, raw: &str, now: Instant) {
        self.query = raw.to_string();
        self.pending_trigger = Some(self.debouncer.schedule(raw.to_string(), now));
    }

    /// Fire the debounced search once its window has elapsed uninterrupted.
    pub fn tick(&mut self, now: Instant) -> Option<LookupRequest> {
        let raw = self.debouncer.poll(now)?;
        self.pending_trigger = None;
        self.execute_search(raw.trim())
    }

    /// Start a new query. An empty query returns to the suggestions state
    /// without calling the lookup service.
    pub fn execute_search(&mut self, clean_query: &str) -> Option<LookupRequest> {
        let clean_query = clean_query.trim();
        self.cursor = 1;
        self.exhausted = false;

        if clean_query.is_empty() {
            if let Some(abandoned) = self.in_flight.take() {
                debug!(id = abandoned.id, "abandoning lookup for cleared query");
            }
            self.active_query.clear();
            self.results.clear();
            self.error = false;
            self.loading = false;
            return None;
        }

        self.active_query = clean_query.to_string();
        self.loading = true;
        info!(query = clean_query, "searching");
        Some(self.issue(LookupKind::FirstPage, 1))
    }

    /// Request the page after the cursor, unless loading, exhausted or at the page cap.
    pub fn load_next_page(&mut self) -> Option<LookupRequest> {
        if self.loading
            || self.exhausted
            || self.cursor >= MAX_PAGE
            || self.error
            || self.active_query.is_empty()
            || self.results.is_empty()
        {
            return None;
        }

        self.loading = true;
        let next_cursor = self.cursor + 1;
        debug!(query = %self.active_query, page = next_cursor, "loading next page");
        Some(self.issue(LookupKind::NextPage, next_cursor))
    }

    /// Clear the query and results. Ignored while a lookup is in flight.
    pub fn reset(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.cancel_trigger();
        self.query.clear();
        self.active_query.clear();
        self.cursor = 1;
        self.results.clear();
        self.error = false;
        self.exhausted = false;
        true
    }

    /// Search for `term` immediately, bypassing the debounce window.
    pub fn select_term(&mut self, term: &str) -> Option<LookupRequest> {
        self.cancel_trigger();
        self.query = term.to_string();
        self.execute_search(term)
    }

    pub fn record_term(&mut self, term: &str) -> bool {
        self.recents.record(term)
    }

    pub fn clear_terms(&mut self) {
        self.recents.clear();
    }

    /// Apply a finished lookup if it is still the one in flight.
    pub fn complete(&mut self, outcome: LookupOutcome) -> Applied {
        if self.in_flight.as_ref() != Some(&outcome.request) {
            debug!(
                id = outcome.request.id,
                query = %outcome.request.query,
                page = outcome.request.page,
                "discarding stale lookup result"
            );
            return Applied::Stale;
        }

        self.in_flight = None;
        self.loading = false;
        let request = outcome.request;

        match (request.kind, outcome.result) {
            (LookupKind::FirstPage, Ok(movies)) if !movies.is_empty() => {
                self.error = false;
                self.exhausted = movies.len() < PAGE_SIZE;
                self.results = movies;
                self.record_term(&request.query);
                Applied::Replaced
            }
            (LookupKind::FirstPage, result) => {
                if let Err(e) = result {
                    info!(query = %request.query, "search failed: {}", e);
                }
                self.error = true;
                Applied::Failed
            }
            (LookupKind::NextPage, Ok(movies)) if !movies.is_empty() => {
                self.error = false;
                if movies.len() < PAGE_SIZE {
                    self.exhausted = true;
                }
                self.results.extend(movies);
                self.cursor = request.page;
                if self.cursor >= MAX_PAGE {
                    self.exhausted = true;
                }
                Applied::Appended
            }
            (LookupKind::NextPage, result) => {
                if let Err(e) = result {
                    debug!(query = %request.query, page = request.page, "pagination stopped: {}", e);
                }
                self.exhausted = true;
                Applied::Exhausted
            }
        }
    }

    fn issue(&mut self, kind: LookupKind, page: u32) -> LookupRequest {
        self.next_request_id += 1;
        let request = LookupRequest {
            id: self.next_request_id,
            query: self.active_query.clone(),
            page,
            kind,
        };
        self.in_flight = Some(request.clone());
        request
    }

    fn cancel_trigger(&mut self) {
        if let Some(token) = self.pending_trigger.take() {
            self.debouncer.cancel(token);
        }
    }
}
