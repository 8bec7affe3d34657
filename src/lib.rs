//! PandaScore API Client Library
//!
//! A Rust client for the paginated, filterable PandaScore esports REST API,
//! with a fluent query builder and transparent multi-page fetching.
//!
//! ## Features
//!
//! - **Query Building**: filter, search, range and multi-key sort predicates
//! - **Typed Results**: decode any payload into your own `serde` types
//! - **Auto-pagination**: `get_all` walks every page and merges the records
//! - **Error Kinds**: API errors are distinguishable from transport and JSON errors
//! - **Resources**: ready-made queries for leagues, series and matches
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pandascore::{Client, Game, Match, Sorting};
//!
//! # async fn example() -> pandascore::Result<()> {
//! let client = Client::new();
//!
//! // Every upcoming match of one series, soonest first
//! let (matches, paging) = client
//!     .request(Game::CsGo, "matches/upcoming")
//!     .filter("serie_id", ["1799"])
//!     .sort("begin_at", Sorting::Ascending)
//!     .page_size(100)
//!     .get_all::<Vec<Match>>()
//!     .await?;
//!
//! println!("{} matches ({} reported)", matches.len(), paging.total_results);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The access token is read from the environment when a client is created:
//! ```bash
//! export PANDASCORE_ACCESS_TOKEN=your-token
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod execution;
pub mod game;
pub mod logging;
pub mod request;
pub mod resources;
pub mod response;

// Re-export commonly used types
pub use client::Client;
pub use core::{QueryParams, Sorting};
pub use error::{PandaScoreError, Result};
pub use game::Game;
pub use request::Request;
pub use resources::{League, Match, MatchOpponent, Opponent, Series};
pub use response::Response;

/// PandaScore API base URL.
pub const BASE_URL: &str = "https://api.pandascore.co/";

/// Environment variable holding the default access token.
pub const ACCESS_TOKEN_ENV_VAR: &str = "PANDASCORE_ACCESS_TOKEN";
