//! Request execution: transport, response decoding and pagination.

use crate::core::request_header_map;
use crate::request::Request;
use crate::response::Response;
use crate::{PandaScoreError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};


/// One untyped record of a paged collection.
type Record = Map<String, Value>;

/// Error body returned by the API for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "error")]
    message: String,
}

impl<'a> Request<'a> {
    /// Execute the request once and decode the body into `T`.
    ///
    /// Returns the decoded value together with the paging metadata from the
    /// response headers. The request keeps its parameters, so it can be
    /// re-executed after changing the page.
    pub async fn get<T: DeserializeOwned>(&self) -> Result<(T, Response)> {
        let http_response = self.send().await?;
        let status = http_response.status();
        let response = Response::from_headers(http_response.headers());
        let body = http_response.bytes().await?;

        let value = decode_body(status, &body)?;
        Ok((value, response))
    }

    /// Fetch every page of the query and decode all records into one `T`.
    ///
    /// Pages are requested one after another starting from the first, whatever
    /// page was configured on the request. Records keep the order the API
    /// returned them in, page by page. The returned metadata is the last page's.
    /// Any failure discards what was fetched so far.
    ///
    /// The walk also stops at an empty page, or when the reported page number
    /// does not advance, so paging headers that never reach the total cannot
    /// keep it going.
    pub async fn get_all<T: DeserializeOwned>(&self) -> Result<(T, Response)> {
        let mut page_request = self.clone();
        let mut page = 1;
        page_request.params.page(page);

        let (mut records, mut response) = page_request.get::<Vec<Record>>().await?;
        let mut stalled = records.is_empty();
        while response.has_more() && !stalled {
            page += 1;
            page_request.params.page(page);
            debug!(
                page,
                total = response.total_results,
                per_page = response.results_per_page,
                "fetching next page"
            );

            let (next, next_response) = page_request.get::<Vec<Record>>().await?;
            stalled = next.is_empty() || next_response.current_page <= response.current_page;
            records.extend(next);
            response = next_response;
        }

        if stalled && response.has_more() {
            warn!(
                page = response.current_page,
                total = response.total_results,
                per_page = response.results_per_page,
                records = records.len(),
                "paging stopped before the reported total"
            );
        }

        debug!(records = records.len(), pages = page, "merged all pages");
        let merged = Value::Array(records.into_iter().map(Value::Object).collect());
        Ok((serde_json::from_value(merged)?, response))
    }

    async fn send(&self) -> Result<reqwest::Response> {
        let url = self.url()?;
        let headers = request_header_map(self.client().access_token())?;

        debug!(%url, "sending PandaScore request");
        Ok(self.client().http().get(url).headers(headers).send().await?)
    }
}

/// Decode a response body: the payload on 2xx, the API error otherwise.
///
/// If an error body is itself malformed, the JSON error is returned instead.
pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    let error: ErrorBody = serde_json::from_slice(body)?;
    warn!(%status, message = %error.message, "PandaScore API returned an error");
    Err(PandaScoreError::Api {
        message: error.message,
    })
}
