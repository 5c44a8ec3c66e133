mod client;
pub mod domain;
mod omdb_url;

pub use client::*;
pub use domain::{MovieSummary, MAX_PAGE, PAGE_SIZE, POSTER_UNAVAILABLE};
pub use omdb_url::OmdbURL;
