use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    domain::{MovieSummary, RawSearchResponse, MAX_PAGE},
    OmdbURL,
};

pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Only feature films are searched.
const SEARCH_TYPE: &str = "movie";

const NOT_FOUND_MESSAGE: &str = "Movie not found!";

#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds the search URL without the API key.
    pub fn search_url(&self, title: &str, page: u32) -> OmdbURL {
        OmdbURL::new(&self.base_url)
            .with_search_title(title)
            .with_page(page)
            .with_type(SEARCH_TYPE)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &OmdbURL) -> Result<T, OmdbFetchError> {
        let url = url.with_param("apikey", &self.api_key);

        let resp = self
            .http
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| OmdbFetchError::ResponseError(e.without_url().to_string()))?;

        check_status(resp.status())?;

        resp.json::<T>().await.map_err(|e| {
            OmdbFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Searches movie titles starting with `title`.
    ///
    /// An explicit "no results" answer from the provider is returned as
    /// [`OmdbFetchError::NotFound`], never as an empty page.
    #[instrument(name = "OmdbClient::search_movies", skip(self))]
    pub async fn search_movies(
        &self,
        title: &str,
        page: u32,
    ) -> Result<Vec<MovieSummary>, OmdbFetchError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(OmdbFetchError::InvalidRequest(
                "Search title must not be empty".to_string(),
            ));
        }
        if !(1..=MAX_PAGE).contains(&page) {
            return Err(OmdbFetchError::InvalidRequest(format!(
                "Page must be between 1 and {}, got {}",
                MAX_PAGE, page
            )));
        }

        let url = self.search_url(title, page);
        let response: RawSearchResponse = self.fetch(&url).await?;
        let movies = movies_from_response(response)?;

        debug!(count = movies.len(), "fetched search page");
        Ok(movies)
    }
}

fn check_status(status: StatusCode) -> Result<(), OmdbFetchError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(OmdbFetchError::Unauthorized);
    }
    if !status.is_success() {
        return Err(OmdbFetchError::Status(status.as_u16()));
    }
    Ok(())
}

fn movies_from_response(response: RawSearchResponse) -> Result<Vec<MovieSummary>, OmdbFetchError> {
    if !response.is_success() {
        let message = response
            .error
            .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string());
        debug!(%message, "provider reported no results");
        return Err(OmdbFetchError::NotFound(message));
    }
    if response.search.is_empty() {
        return Err(OmdbFetchError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    }
    Ok(response.search)
}

#[derive(Error, Debug)]
pub enum OmdbFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("NotFound: {0}")]
    NotFound(String),
    #[error("InvalidRequest: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    fn raw(json: &str) -> RawSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    /// Serves a single canned HTTP response and returns its base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn search_url_never_contains_api_key() {
        let client = OmdbClient::new("https://www.omdbapi.com/", "secret");
        let url = client.search_url("Dune", 1);
        assert_eq!(
            url.as_ref(),
            "https://www.omdbapi.com/?s=Dune*&page=1&type=movie"
        );
        assert!(!url.as_ref().contains("secret"));
    }

    #[test]
    fn rejected_credentials_are_unauthorized() {
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(OmdbFetchError::Unauthorized)
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(OmdbFetchError::Unauthorized)
        ));
    }

    #[test]
    fn other_error_statuses_keep_their_code() {
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(OmdbFetchError::Status(500))
        ));
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(OmdbFetchError::Status(404))
        ));
        assert!(check_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn false_response_is_not_found_with_provider_message() {
        let err = movies_from_response(raw(
            r#"{"Response":"False","Error":"Too many results."}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, OmdbFetchError::NotFound(ref m) if m == "Too many results."));

        let err = movies_from_response(raw(r#"{"Response":"False"}"#)).unwrap_err();
        assert!(matches!(err, OmdbFetchError::NotFound(ref m) if m == NOT_FOUND_MESSAGE));
    }

    #[test]
    fn empty_search_list_is_not_found() {
        let err = movies_from_response(raw(r#"{"Search":[],"Response":"True"}"#)).unwrap_err();
        assert!(matches!(err, OmdbFetchError::NotFound(_)));
    }

    #[test]
    fn successful_response_yields_movies() {
        let movies = movies_from_response(raw(
            r#"{"Search":[{"Title":"Heat","Year":"1995","Poster":"N/A"}],"totalResults":"1","Response":"True"}"#,
        ))
        .unwrap();
        assert_eq!(movies, vec![MovieSummary::new("Heat", "1995", "N/A")]);
    }

    #[tokio::test]
    async fn search_movies_maps_served_responses() {
        let url = serve_once(
            "200 OK",
            r#"{"Search":[{"Title":"Alien","Year":"1979","Poster":"N/A"}],"totalResults":"1","Response":"True"}"#,
        )
        .await;
        let movies = OmdbClient::new(url, "key").search_movies("Alien", 1).await.unwrap();
        assert_eq!(movies[0].title, "Alien");

        let url = serve_once("200 OK", r#"{"Response":"False","Error":"Movie not found!"}"#).await;
        let err = OmdbClient::new(url, "key").search_movies("Zzz", 1).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::NotFound(_)));

        let url = serve_once("401 Unauthorized", r#"{"Response":"False","Error":"Invalid API key!"}"#).await;
        let err = OmdbClient::new(url, "bad").search_movies("Alien", 1).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::Unauthorized));

        let url = serve_once("503 Service Unavailable", "{}").await;
        let err = OmdbClient::new(url, "key").search_movies("Alien", 1).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::Status(503)));
    }

    #[tokio::test]
    async fn rejects_empty_title_without_network() {
        let client = OmdbClient::new("http://127.0.0.1:9", "key");
        let err = client.search_movies("   ", 1).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn rejects_out_of_range_pages_without_network() {
        let client = OmdbClient::new("http://127.0.0.1:9", "key");

        let err = client.search_movies("Dune", 0).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::InvalidRequest(_)));

        let err = client.search_movies("Dune", MAX_PAGE + 1).await.unwrap_err();
        assert!(matches!(err, OmdbFetchError::InvalidRequest(_)));
    }
}
