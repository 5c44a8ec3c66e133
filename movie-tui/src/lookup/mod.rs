//! Boundary to the movie lookup service.
//!
//! The controller only ever sees a list of [`MovieSummary`] or a single
//! [`LookupError`]; transport errors and "no results" answers are not
//! distinguished past this point.

use async_trait::async_trait;
use omdb::MovieSummary;
use std::time::Duration;

mod dev_catalog;
#[cfg(test)]
pub(crate) mod mock;
mod omdb_lookup;

pub use dev_catalog::DevCatalog;
#[cfg(test)]
pub use mock::MockLookup;
pub use omdb_lookup::OmdbLookup;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("{0}")]
    Failed(String),

    #[error("Lookup timed out after {0:?}")]
    TimedOut(Duration),
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Fetch one page of movies whose title starts with or contains `query`.
    async fn lookup(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>>;
}

/// Run a lookup, converting an elapsed `limit` into [`LookupError::TimedOut`].
pub async fn with_timeout(
    lookup: &dyn MovieLookup,
    query: &str,
    page: u32,
    limit: Duration,
) -> Result<Vec<MovieSummary>> {
    match tokio::time::timeout(limit, lookup.lookup(query, page)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::TimedOut(limit)),
    }
}
