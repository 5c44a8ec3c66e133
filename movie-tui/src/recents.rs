use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::debug;

use crate::term_store::TermStore;

/// Key under which the delimited list is persisted.
pub const RECENT_TERMS_KEY: &str = "recent_terms";

pub const DELIMITER: char = ',';

/// Shown when no query is active and nothing has been searched yet.
pub const SUGGESTED_TERMS: &[&str] = &[
    "Deadpool",
    "Dune",
    "Alien",
    "Batman",
    "The Matrix",
    "Spirited Away",
];

/// Most-recent-first list of successful search terms, mirrored into a [`TermStore`].
#[derive(Debug)]
pub struct RecentTerms<S> {
    store: S,
    terms: Vec<String>,
}

fn split_terms(raw: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in raw.split(DELIMITER).map(str::trim) {
        if !term.is_empty() && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

impl<S: TermStore> RecentTerms<S> {
    /// Read the store once. A missing value is an empty list, not an error.
    pub fn load(store: S) -> Self {
        let terms = store
            .get(RECENT_TERMS_KEY)
            .map(|raw| split_terms(&raw))
            .unwrap_or_default();
        Self { store, terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Front-insert `term` unless it is already present.
    ///
    /// Returns `true` when the term was added. Terms containing the
    /// delimiter cannot be represented and are skipped.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        if term.contains(DELIMITER) {
            debug!(term, "not recording term containing the delimiter");
            return false;
        }

        // An unreachable store reads as absent; the session list stands in for it.
        let mut terms = self
            .store
            .get(RECENT_TERMS_KEY)
            .map(|raw| split_terms(&raw))
            .unwrap_or_else(|| self.terms.clone());
        if terms.iter().any(|t| t == term) {
            self.terms = terms;
            return false;
        }

        terms.insert(0, term.to_string());
        let joined = terms.join(DELIMITER.to_string().as_str());
        self.store.set(RECENT_TERMS_KEY, &joined);
        self.terms = terms;
        true
    }

    pub fn clear(&mut self) {
        self.store.remove(RECENT_TERMS_KEY);
        self.terms.clear();
    }

    /// Recent terms when there are any, otherwise the static suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        if self.terms.is_empty() {
            SUGGESTED_TERMS.iter().map(|s| s.to_string()).collect()
        } else {
            self.terms.clone()
        }
    }

    /// Recent terms ranked by fuzzy similarity to `input`, best first.
    pub fn matching(&self, input: &str) -> Vec<String> {
        let input = input.trim();
        if input.is_empty() {
            return self.terms.clone();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(&String, i64)> = self
            .terms
            .iter()
            .filter_map(|term| matcher.fuzzy_match(term, input).map(|score| (term, score)))
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(term, _)| term.clone()).collect()
    }
}
