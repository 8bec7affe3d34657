//! Resource query command implementation

use std::io::Write;

use serde_json::Value;
use tracing::info;

use crate::{cli::QueryArgs, Client, Request, Response, Result};


/// Parameters for the `get` command
#[derive(Debug)]
pub struct GetParams {
    pub game: String,
    pub path: String,
    pub query: QueryArgs,
    pub all: bool,
    pub token: Option<String>,
    pub base_url: String,
}

/// Build the client for a command, letting `--token` override the environment.
pub fn build_client(token: Option<String>, base_url: String) -> Client {
    let client = Client::new().with_base_url(base_url);
    match token {
        Some(token) => client.with_access_token(token),
        None => client,
    }
}

/// Apply every predicate from the command line to `request`.
pub fn apply_query<'a>(mut request: Request<'a>, query: &QueryArgs) -> Request<'a> {
    for f in &query.filters {
        request = request.filter(&f.field, &f.values);
    }
    for s in &query.searches {
        request = request.search(&s.field, &s.value);
    }
    for r in &query.ranges {
        request = request.range(&r.field, &r.lower, &r.upper);
    }
    for s in &query.sort {
        request = request.sort(&s.field, s.direction);
    }
    if let Some(page) = query.page {
        request = request.page(page);
    }
    if let Some(size) = query.page_size {
        request = request.page_size(size);
    }
    request
}

/// One-line summary of the paging headers.
pub fn format_paging(response: &Response) -> String {
    format!(
        "page {} ({} per page), {} results total{}",
        response.current_page,
        response.results_per_page,
        response.total_results,
        if response.has_more() {
            ", more available"
        } else {
            ""
        }
    )
}

/// Handle the get command
pub async fn handle_get(params: GetParams) -> Result<()> {
    let client = build_client(params.token, params.base_url);
    let request = apply_query(client.request(params.game, params.path), &params.query);

    // tarpaulin::skip - HTTP call, tested via the execution tests
    let (value, response): (Value, Response) = if params.all {
        request.get_all().await?
    } else {
        request.get().await?
    };

    info!(
        page = response.current_page,
        total = response.total_results,
        "query complete"
    );
    eprintln!("{}", format_paging(&response));

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &value)?;
    writeln!(out)?;
    Ok(())
}
