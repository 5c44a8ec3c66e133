use async_trait::async_trait;
use omdb::{MovieSummary, OmdbClient, OmdbFetchError};

use super::{LookupError, MovieLookup, Result};

/// Lookup service backed by the OMDb HTTP API.
#[derive(Debug, Clone)]
pub struct OmdbLookup {
    client: OmdbClient,
}

impl OmdbLookup {
    pub fn new(client: OmdbClient) -> Self {
        Self { client }
    }
}

impl From<OmdbFetchError> for LookupError {
    fn from(e: OmdbFetchError) -> Self {
        match e {
            OmdbFetchError::Unauthorized => {
                LookupError::Failed("OMDb rejected the API key".to_string())
            }
            other => LookupError::Failed(other.to_string()),
        }
    }
}

#[async_trait]
impl MovieLookup for OmdbLookup {
    async fn lookup(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>> {
        Ok(self.client.search_movies(query, page).await?)
    }
}
