//! Paging metadata reported out-of-band in response headers.

use reqwest::header::HeaderMap;

pub const PAGE_HEADER: &str = "X-Page";
pub const PER_PAGE_HEADER: &str = "X-Per-Page";
pub const TOTAL_HEADER: &str = "X-Total";

/// Paging information about an executed request.
///
/// This is not the response body: it carries what the API reports in headers.
/// Each field is 0 when its header was missing or not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    pub current_page: i64,
    pub results_per_page: i64,
    pub total_results: i64,
}

impl Response {
    pub fn new(current_page: i64, results_per_page: i64, total_results: i64) -> Self {
        Self {
            current_page,
            results_per_page,
            total_results,
        }
    }

    /// Read `X-Page`, `X-Per-Page` and `X-Total`. Never fails.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header_or_zero = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0)
        };

        Self {
            current_page: header_or_zero(PAGE_HEADER),
            results_per_page: header_or_zero(PER_PAGE_HEADER),
            total_results: header_or_zero(TOTAL_HEADER),
        }
    }

    /// True when results exist beyond the current page.
    pub fn has_more(&self) -> bool {
        self.total_results
            .saturating_sub(self.results_per_page.saturating_mul(self.current_page))
            > 0
    }
}
