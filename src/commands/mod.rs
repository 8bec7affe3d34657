//! Command handlers for the CLI

pub mod games;
pub mod query;
