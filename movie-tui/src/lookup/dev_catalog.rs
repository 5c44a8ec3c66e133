use async_trait::async_trait;
use omdb::{MovieSummary, PAGE_SIZE};
use std::sync::Arc;

use super::{LookupError, MovieLookup, Result};

/// In-memory catalog for `movie-tui dev`.
///
/// Matches case-insensitively on any part of the title and pages by
/// [`PAGE_SIZE`], reporting "no results" as a failure like the real provider.
#[derive(Debug, Clone)]
pub struct DevCatalog {
    movies: Arc<Vec<MovieSummary>>,
}

impl DevCatalog {
    pub fn new() -> Self {
        Self::with_movies(seed_catalog())
    }

    pub fn with_movies(movies: Vec<MovieSummary>) -> Self {
        Self {
            movies: Arc::new(movies),
        }
    }

    fn matches(&self, query: &str) -> Vec<&MovieSummary> {
        let needle = query.trim().to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for DevCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieLookup for DevCatalog {
    async fn lookup(&self, query: &str, page: u32) -> Result<Vec<MovieSummary>> {
        if query.trim().is_empty() || page == 0 {
            return Err(LookupError::Failed("Invalid search request".to_string()));
        }

        let page_items: Vec<MovieSummary> = self
            .matches(query)
            .into_iter()
            .skip((page as usize - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        if page_items.is_empty() {
            return Err(LookupError::Failed("Movie not found!".to_string()));
        }
        Ok(page_items)
    }
}

fn seed_catalog() -> Vec<MovieSummary> {
    let movie = |title: &str, year: &str, poster: &str| MovieSummary::new(title, year, poster);

    let mut movies = vec![
        movie("Deadpool", "2016", "https://posters.example/deadpool.jpg"),
        movie("Deadpool 2", "2018", "https://posters.example/deadpool-2.jpg"),
        movie("Deadpool & Wolverine", "2024", "https://posters.example/deadpool-3.jpg"),
        movie("Dune", "1984", "https://posters.example/dune-1984.jpg"),
        movie("Dune", "2021", "https://posters.example/dune-2021.jpg"),
        movie("Dune: Part Two", "2024", "https://posters.example/dune-2.jpg"),
        movie("Alien", "1979", "https://posters.example/alien.jpg"),
        movie("Aliens", "1986", "https://posters.example/aliens.jpg"),
        movie("Alien 3", "1992", "N/A"),
        movie("Alien: Resurrection", "1997", "N/A"),
        movie("Alien: Romulus", "2024", "https://posters.example/romulus.jpg"),
        movie("Batman", "1989", "https://posters.example/batman-1989.jpg"),
        movie("Batman Returns", "1992", "https://posters.example/batman-returns.jpg"),
        movie("Batman Begins", "2005", "https://posters.example/batman-begins.jpg"),
        movie("The Batman", "2022", "https://posters.example/the-batman.jpg"),
        movie("The Matrix", "1999", "https://posters.example/matrix.jpg"),
        movie("The Matrix Reloaded", "2003", "https://posters.example/reloaded.jpg"),
        movie("The Matrix Revolutions", "2003", "N/A"),
        movie("The Matrix Resurrections", "2021", "N/A"),
        movie("Spirited Away", "2001", "https://posters.example/spirited-away.jpg"),
    ];

    // Enough "Star" titles to page through several times.
    for part in 1..=27 {
        movies.push(movie(
            &format!("Star Voyage {}", part),
            &(1977 + part).to_string(),
            "N/A",
        ));
    }

    movies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_case_insensitively_on_substring() {
        let catalog = DevCatalog::new();
        let movies = catalog.lookup("matrix", 1).await.unwrap();
        assert_eq!(movies.len(), 4);
        assert!(movies.iter().all(|m| m.title.contains("Matrix")));
    }

    #[tokio::test]
    async fn pages_by_ten() {
        let catalog = DevCatalog::new();
        assert_eq!(catalog.lookup("star voyage", 1).await.unwrap().len(), 10);
        assert_eq!(catalog.lookup("star voyage", 2).await.unwrap().len(), 10);
        assert_eq!(catalog.lookup("star voyage", 3).await.unwrap().len(), 7);
        assert!(catalog.lookup("star voyage", 4).await.is_err());
    }

    #[tokio::test]
    async fn zero_matches_is_a_failure() {
        let catalog = DevCatalog::new();
        let err = catalog.lookup("zzzz-no-such-title", 1).await.unwrap_err();
        assert_eq!(err, LookupError::Failed("Movie not found!".to_string()));
    }
}
