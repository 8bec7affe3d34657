//! Query parameter accumulation and encoding.
//!
//! PandaScore expresses every predicate as a bracketed query parameter:
//!
//! - **filter**: `filter[field]=a,b` exact match against any listed value
//! - **search**: `search[field]=value` substring match
//! - **range**: `range[field]=lower,upper` inclusive bounds
//! - **sort**: `sort=field,-other` multi-key, in the given order
//! - **paging**: `page[number]=N` and `page[size]=N`
//!
//! Field names are opaque: nothing here knows which fields a resource supports.

use super::sorting::Sorting;
use std::collections::BTreeMap;
use url::form_urlencoded;


/// Page size used when the caller asks for one outside `1..=MAX_PAGE_SIZE`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Accumulated query parameters for one request.
///
/// Maps never hold an empty field name or an empty value list; setters
/// silently ignore such input.
///
/// # Examples
///
/// ```rust
/// use pandascore::core::{QueryParams, Sorting};
///
/// let mut params = QueryParams::default();
/// params
///     .filter("name", ["ESL", "IEM"])
///     .sort("name", Sorting::Ascending)
///     .sort("modified_at", Sorting::Descending)
///     .page_size(20);
///
/// assert_eq!(
///     params.encode(),
///     "filter%5Bname%5D=ESL%2CIEM&sort=name%2C-modified_at&page%5Bsize%5D=20"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    filter: BTreeMap<String, String>,
    search: BTreeMap<String, String>,
    range: BTreeMap<String, String>,
    sort: Vec<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl QueryParams {
    /// Require `field` to equal one of `values`. Replaces any earlier filter on `field`.
    pub fn filter<I, S>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        if !field.is_empty() && !values.is_empty() {
            self.filter.insert(field.to_string(), values.join(","));
        }
        self
    }

    /// Require `field` to contain `value`.
    pub fn search(&mut self, field: &str, value: &str) -> &mut Self {
        if !field.is_empty() && !value.is_empty() {
            self.search.insert(field.to_string(), value.to_string());
        }
        self
    }

    /// Require `field` to lie within `lower..=upper`. Bounds are passed through as-is.
    pub fn range(&mut self, field: &str, lower: &str, upper: &str) -> &mut Self {
        if !field.is_empty() {
            self.range
                .insert(field.to_string(), format!("{},{}", lower, upper));
        }
        self
    }

    /// Append a sort key. Earlier keys take precedence over later ones.
    pub fn sort(&mut self, field: &str, direction: Sorting) -> &mut Self {
        if !field.is_empty() {
            self.sort.push(direction.for_field(field));
        }
        self
    }

    /// Select the page to fetch; anything below 1 selects the first page.
    pub fn page(&mut self, number: i64) -> &mut Self {
        self.page = Some(match u32::try_from(number) {
            Ok(n) if n > 0 => n,
            _ => 1,
        });
        self
    }

    /// Select the number of results per page, falling back to [`DEFAULT_PAGE_SIZE`]
    /// when `size` is outside `1..=MAX_PAGE_SIZE`.
    pub fn page_size(&mut self, size: i64) -> &mut Self {
        self.page_size = Some(match u32::try_from(size) {
            Ok(n) if (1..=MAX_PAGE_SIZE).contains(&n) => n,
            _ => DEFAULT_PAGE_SIZE,
        });
        self
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filter
    }

    pub fn searches(&self) -> &BTreeMap<String, String> {
        &self.search
    }

    pub fn ranges(&self) -> &BTreeMap<String, String> {
        &self.range
    }

    pub fn sort_tokens(&self) -> &[String] {
        &self.sort
    }

    /// The selected page, if one was set.
    pub fn page_number(&self) -> Option<u32> {
        self.page
    }

    /// The selected page size, if one was set.
    pub fn results_per_page(&self) -> Option<u32> {
        self.page_size
    }

    /// Key/value pairs in wire order: filters, searches, ranges, sort, page number, page size.
    ///
    /// Unset parameters are left out entirely, as is `page[number]` for the first page.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (category, entries) in [
            ("filter", &self.filter),
            ("search", &self.search),
            ("range", &self.range),
        ] {
            pairs.extend(
                entries
                    .iter()
                    .map(|(field, value)| (format!("{}[{}]", category, field), value.clone())),
            );
        }

        if !self.sort.is_empty() {
            pairs.push(("sort".to_string(), self.sort.join(",")));
        }

        if let Some(page) = self.page.filter(|&p| p > 1) {
            pairs.push(("page[number]".to_string(), page.to_string()));
        }

        if let Some(size) = self.page_size.filter(|&s| s > 0) {
            pairs.push(("page[size]".to_string(), size.to_string()));
        }

        pairs
    }

    /// Percent-encoded query string, without a leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }
}
