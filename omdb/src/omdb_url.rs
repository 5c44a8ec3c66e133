#[derive(Debug, Clone)]
pub struct OmdbURL(String);

impl AsRef<str> for OmdbURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl OmdbURL {
    pub fn new(base: &str) -> Self {
        Self(base.to_string())
    }

    /// Append a query parameter, percent-encoding the value.
    pub fn with_param(&self, key: &str, value: &str) -> Self {
        self.with_raw_param(key, &urlencoding::encode(value))
    }

    /// Title search with a trailing wildcard so the provider matches on prefix.
    pub fn with_search_title(&self, title: &str) -> Self {
        self.with_raw_param("s", &format!("{}*", urlencoding::encode(title)))
    }

    pub fn with_page(&self, page: u32) -> Self {
        self.with_raw_param("page", &page.to_string())
    }

    pub fn with_type(&self, kind: &str) -> Self {
        self.with_param("type", kind)
    }

    fn with_raw_param(&self, key: &str, value: &str) -> Self {
        let separator = if self.0.contains('?') { '&' } else { '?' };
        Self(format!("{}{}{}={}", self.0, separator, key, value))
    }
}
