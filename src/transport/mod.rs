//! Raw page fetching.
//!
//! The scraper only ever needs two things from the network: the text behind a
//! URL, and the text returned by a form POST. Everything else is parsing.

mod http;

pub use http::HttpTransport;

use crate::error::Result;

/// Blocking page fetcher used by [`crate::CatalogScraper`].
pub trait Transport: Send + Sync {
    /// GET `url` and return the response body.
    fn get(&self, url: &str) -> Result<String>;

    /// POST `params` form-encoded to `url` and return the response body.
    ///
    /// Keys may repeat (`ids[]=1&ids[]=2`), hence the pair list.
    fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String>;
}
