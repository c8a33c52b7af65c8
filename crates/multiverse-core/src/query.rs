//! List-mode query parameters and page links

use std::collections::HashMap;

use url::Url;

use crate::error::{LocationError, LocationResult};
use crate::filter::LocationFilter;

/// Path of the location collection, relative to the public URL
pub const LOCATION_PATH: &str = "/api/location";

/// A validated list-mode request: a filter plus a 1-based page number
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: LocationFilter,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: LocationFilter::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// Build a list query from raw query-string parameters.
    ///
    /// A missing `page` means page 1. A `page` that is not a positive
    /// integer names a page that cannot exist.
    pub fn from_params(params: &HashMap<String, String>) -> LocationResult<Self> {
        let page = match params.get("page") {
            None => 1,
            Some(raw) => parse_page(raw)?,
        };

        Ok(Self {
            filter: LocationFilter::from_params(params),
            page,
        })
    }
}

/// Digits only. A sign, whitespace (a raw `+` decodes to a space) or
/// anything else names no page.
fn parse_page(raw: &str) -> LocationResult<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LocationError::NoPage(raw.to_string()));
    }
    match raw.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(LocationError::NoPage(raw.to_string())),
    }
}

/// Builds absolute links to pages of the location collection
#[derive(Debug, Clone)]
pub struct PageLinks {
    collection: Url,
}

impl PageLinks {
    /// Links rooted at `public_url` (e.g. `http://localhost:8080`)
    pub fn new(public_url: &str) -> Result<Self, url::ParseError> {
        let collection = Url::parse(&format!(
            "{}{}",
            public_url.trim_end_matches('/'),
            LOCATION_PATH
        ))?;
        Ok(Self { collection })
    }

    /// URL of the collection itself
    pub fn collection_url(&self) -> &str {
        self.collection.as_str()
    }

    /// URL of `page` with the active filter terms appended after it
    pub fn page(&self, page: usize, filter: &LocationFilter) -> String {
        let mut url = self.collection.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            for (key, value) in filter.params() {
                pairs.append_pair(key, value);
            }
        }
        url.into()
    }
}
