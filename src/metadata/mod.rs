//! Movie metadata lookup.

pub mod provider;
pub mod tmdb;

pub use provider::{MovieDetail, SearchResult};
pub use tmdb::TmdbClient;
