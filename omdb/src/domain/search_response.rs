use serde::Deserialize;

use super::MovieSummary;

/// Raw search payload as returned by the provider.
///
/// A successful search looks like
/// `{"Search":[...],"totalResults":"123","Response":"True"}`, a miss like
/// `{"Response":"False","Error":"Movie not found!"}`.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl RawSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_search() {
        let raw = r#"{
            "Search": [
                {"Title":"Deadpool","Year":"2016","imdbID":"tt1431045","Type":"movie","Poster":"https://img/a.jpg"},
                {"Title":"Deadpool 2","Year":"2018","imdbID":"tt5463162","Type":"movie","Poster":"N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;
        let response: RawSearchResponse = serde_json::from_str(raw).unwrap();
        assert!(response.is_success());
        assert_eq!(response.search.len(), 2);
        assert_eq!(response.search[1].title, "Deadpool 2");
    }

    #[test]
    fn parses_not_found_response() {
        let raw = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let response: RawSearchResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error.as_deref(), Some("Movie not found!"));
        assert!(response.search.is_empty());
    }
}
