use serde::Deserialize;

/// Sentinel the provider uses when a title has no poster.
pub const POSTER_UNAVAILABLE: &str = "N/A";

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
}

impl MovieSummary {
    pub fn new(title: impl Into<String>, year: impl Into<String>, poster: impl Into<String>) -> Self {
        Self {
            poster: poster.into(),
            title: title.into(),
            year: year.into(),
        }
    }

    /// The poster URL, or `None` when the provider reported the `N/A` sentinel.
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == POSTER_UNAVAILABLE {
            None
        } else {
            Some(poster)
        }
    }
}
