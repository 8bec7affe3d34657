//! HTTP header helpers for PandaScore API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

/// Value sent in the `User-Agent` header.
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Build the headers sent with every API request.
///
/// `Authorization: Bearer <token>` is only added when `access_token` is non-empty;
/// an empty token is left for the API to reject.
pub fn request_header_map(access_token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(&user_agent())?);
    if !access_token.is_empty() {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
        bearer.set_sensitive(true);
        h.insert(AUTHORIZATION, bearer);
    }
    Ok(h)
}
