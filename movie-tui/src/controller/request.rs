use omdb::MovieSummary;

use crate::lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Page 1 of a new query; replaces the result set.
    FirstPage,
    /// A following page; appends to the result set.
    NextPage,
}

/// A lookup the runtime must perform, tagged with the state it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: u64,
    pub query: String,
    pub page: u32,
    pub kind: LookupKind,
}

/// Result of a [`LookupRequest`], handed back to the controller.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub request: LookupRequest,
    pub result: lookup::Result<Vec<MovieSummary>>,
}

/// What [`super::SearchController::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result set was replaced with a fresh first page.
    Replaced,
    /// A following page was appended.
    Appended,
    /// First page failed; the error flag is set.
    Failed,
    /// A following page failed; pagination stopped.
    Exhausted,
    /// The outcome no longer matches the lookup in flight and was dropped.
    Stale,
}
