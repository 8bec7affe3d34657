//! CLI argument definitions and parsing.

pub mod types;

use crate::BASE_URL;
use clap::{Args, Parser, Subcommand};
use types::{FilterArg, RangeArg, SearchArg, SortArg};

/// Query parameters shared by every resource query.
#[derive(Debug, Default, Args)]
pub struct QueryArgs {
    /// Exact match, repeatable: `-f name=ESL,IEM -f slug=cs-go-esl`.
    #[clap(long = "filter", short = 'f', value_name = "FIELD=V1,V2")]
    pub filters: Vec<FilterArg>,

    /// Substring match, repeatable: `-s name=major`.
    #[clap(long = "search", short = 's', value_name = "FIELD=VALUE")]
    pub searches: Vec<SearchArg>,

    /// Inclusive bounds, repeatable: `-r begin_at=2019-01-01T00:00:00Z,2019-02-01T00:00:00Z`.
    #[clap(long = "range", short = 'r', value_name = "FIELD=LOWER,UPPER")]
    pub ranges: Vec<RangeArg>,

    /// Sort key, repeatable; prefix with `-` for descending: `--sort=-modified_at`.
    #[clap(long = "sort", value_name = "[-]FIELD", allow_hyphen_values = true)]
    pub sort: Vec<SortArg>,

    /// Page to fetch (ignored with `--all`).
    #[clap(long)]
    pub page: Option<i64>,

    /// Results per page, 1 to 100.
    #[clap(long)]
    pub page_size: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query a resource and print its JSON payload.
    ///
    /// Paging metadata (`X-Page`, `X-Per-Page`, `X-Total`) is printed to stderr.
    Get {
        /// Game identifier (see `pandascore games`).
        game: String,

        /// Resource path below the game, e.g. `matches/upcoming`.
        path: String,

        #[clap(flatten)]
        query: QueryArgs,

        /// Follow pagination and merge every page into one array.
        #[clap(long)]
        all: bool,

        /// Access token (or set `PANDASCORE_ACCESS_TOKEN` env var).
        #[clap(long)]
        token: Option<String>,

        /// API host to query.
        #[clap(long, default_value = BASE_URL)]
        base_url: String,
    },

    /// List the game identifiers accepted by `get`.
    Games,
}

#[derive(Debug, Parser)]
#[clap(name = "pandascore", version, about = "Query the PandaScore esports API")]
pub struct PandaScore {
    /// Log requests and paging progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
