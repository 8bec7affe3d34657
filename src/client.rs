//! The long-lived PandaScore client: base URL, access token and HTTP transport.

use crate::game::Game;
use crate::request::Request;
use crate::{Result, ACCESS_TOKEN_ENV_VAR, BASE_URL};
use std::fmt;
use url::Url;


/// Entry point for building requests against the PandaScore API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted, so
/// clones share one connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use pandascore::{Client, Game, Sorting};
/// use serde_json::Value;
///
/// # async fn example() -> pandascore::Result<()> {
/// let client = Client::new().with_access_token("my-token");
/// let (leagues, paging) = client
///     .request(Game::CsGo, "leagues")
///     .search("name", "ESL")
///     .sort("modified_at", Sorting::Descending)
///     .get_all::<Vec<Value>>()
///     .await?;
/// println!("{} leagues, {} total", leagues.len(), paging.total_results);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    access_token: String,
    http: reqwest::Client,
}

impl Client {
    /// Client for the public API. The access token is read once from
    /// `PANDASCORE_ACCESS_TOKEN`; an unset variable leaves it empty.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            access_token: std::env::var(ACCESS_TOKEN_ENV_VAR).unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Use a preconfigured transport (timeouts, proxies, ...).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request for `path` below `game`.
    ///
    /// The game identifier is checked when the request executes, so unknown
    /// identifiers surface as [`PandaScoreError::InvalidGame`](crate::PandaScoreError::InvalidGame)
    /// before anything is sent.
    pub fn request(&self, game: impl Into<String>, path: impl Into<String>) -> Request<'_> {
        Request::new(self, game.into(), path.into())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolve `<base>/<game>/<path>`.
    pub(crate) fn endpoint_url(&self, game: Game, path: &str) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(&format!("{}/{}", game, path.trim_start_matches('/')))?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &if self.access_token.is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}
