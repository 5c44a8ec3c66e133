mod movie;
mod search_response;

pub use movie::*;
pub use search_response::*;

/// Number of results the provider returns per page.
pub const PAGE_SIZE: usize = 10;

/// The provider does not define behavior past this page.
pub const MAX_PAGE: u32 = 100;
