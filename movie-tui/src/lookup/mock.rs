//! Scripted lookup service for tests.

use async_trait::async_trait;
use omdb::MovieSummary;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{LookupError, MovieLookup, Result};

/// Returns a fixed number of movies per page; unscripted pages fail.
#[derive(Clone, Default)]
pub struct MockLookup {
    pages: Arc<HashMap<u32, usize>>,
    delay: Option<Duration>,
    call_count: Arc<AtomicUsize>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `page` to return `count` movies.
    pub fn with_page(mut self, page: u32, count: usize) -> Self {
        Arc::make_mut(&mut self.pages).insert(page, count);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times `lookup` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

/// `count` distinct movies for `query`/`page`.
pub fn movies_for(query: &str, page: u32, count: usize) -> Vec<MovieSummary> {
    (0..count)
        .map(|i| MovieSummary::new(format!("{} p{} #{}", query, page, i), "2000", "N/A"))
        .collect()
}

#[async_trait]
impl MovieLookup for MockLookup {
    async fn lookup(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.pages.get(&page) {
            Some(&count) if count > 0 => Ok(movies_for(query, page, count)),
            _ => Err(LookupError::Failed("Movie not found!".to_string())),
        }
    }
}
