//! Chainable request builder bound to one `(game, path)` resource.

use crate::client::Client;
use crate::core::{QueryParams, Sorting};
use crate::game::Game;
use crate::Result;
use url::Url;

/// A query against one resource, configured through chained calls and executed
/// with [`get`](Request::get) or [`get_all`](Request::get_all).
///
/// Every configuration method consumes and returns the request. Clone it to run
/// variations of the same query.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    client: &'a Client,
    game: String,
    path: String,
    pub(crate) params: QueryParams,
}

impl<'a> Request<'a> {
    pub(crate) fn new(client: &'a Client, game: String, path: String) -> Self {
        Self {
            client,
            game,
            path,
            params: QueryParams::default(),
        }
    }

    /// Only return records whose `field` equals one of `values`.
    pub fn filter<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params.filter(field, values);
        self
    }

    /// Only return records whose `field` contains `value`.
    pub fn search(mut self, field: &str, value: &str) -> Self {
        self.params.search(field, value);
        self
    }

    /// Only return records whose `field` lies within `lower..=upper`.
    pub fn range(mut self, field: &str, lower: &str, upper: &str) -> Self {
        self.params.range(field, lower, upper);
        self
    }

    pub fn sort(mut self, field: &str, direction: Sorting) -> Self {
        self.params.sort(field, direction);
        self
    }

    pub fn page(mut self, number: i64) -> Self {
        self.params.page(number);
        self
    }

    pub fn page_size(mut self, size: i64) -> Self {
        self.params.page_size(size);
        self
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }

    pub fn game(&self) -> &str {
        &self.game
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// The absolute URL this request would be sent to.
    ///
    /// Fails with `InvalidGame` when the game identifier is unknown; this is the
    /// only validation done without contacting the API.
    pub fn url(&self) -> Result<Url> {
        let game: Game = self.game.parse()?;
        let mut url = self.client.endpoint_url(game, &self.path)?;

        let query = self.params.encode();
        url.set_query(if query.is_empty() { None } else { Some(&query) });
        Ok(url)
    }
}
