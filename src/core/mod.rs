//! Request-building primitives for the PandaScore client
//!
//! This module consolidates the pieces every request is assembled from:
//! - `query`: filter/search/range/sort/paging parameters and their encoding
//! - `sorting`: sort direction tokens
//! - `http`: common request headers

pub mod http;
pub mod query;
pub mod sorting;

// Re-export commonly used items for convenience
pub use http::request_header_map;
pub use query::{QueryParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use sorting::Sorting;
