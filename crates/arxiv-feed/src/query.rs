//! Search query construction for the arXiv query API.
//!
//! A [`SearchQuery`] pairs the raw query expression with the number of
//! results to request and knows how to expand itself into the fully encoded
//! request URL. Sorting is fixed to most-recently-updated first, so a
//! snapshot always reflects the latest activity for its query.

use url::Url;

use super::*;

/// A single search against the arXiv query API.
///
/// The query string is kept raw; percent-encoding happens only when the URL
/// is built. Nothing here validates the expression — an invalid or empty one
/// is passed through and whatever the service says about it surfaces as a
/// fetch failure. arXiv enforces its own ceiling on result counts, so no
/// upper bound is applied to `max_results` either.
///
/// # Examples
///
/// ```
/// use arxiv_feed::{client::ARXIV_API_URL, query::SearchQuery};
///
/// let query = SearchQuery::new("cat:cs.AI", 5);
/// let url = query.to_url(ARXIV_API_URL).unwrap();
///
/// assert!(url.as_str().contains("search_query=cat%3Acs.AI"));
/// assert!(url.as_str().contains("max_results=5"));
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
  /// Raw search expression, e.g. `cat:cs.AI OR all:machine learning`.
  pub query:       String,
  /// Number of results to request from the API.
  pub max_results: u32,
}

impl SearchQuery {
  /// Creates a search for `query` requesting at most `max_results` entries.
  pub fn new(query: impl Into<String>, max_results: u32) -> Self {
    Self { query: query.into(), max_results }
  }

  /// Builds the fully encoded request URL against `endpoint`.
  ///
  /// The expression is form-encoded into `search_query`, the result window
  /// always starts at offset 0, and results are ordered by last-updated
  /// date, descending. Encoding itself never fails; the only error here is
  /// an `endpoint` that isn't a valid URL.
  pub fn to_url(&self, endpoint: &str) -> Result<Url, FeedError> {
    let mut url = Url::parse(endpoint)?;
    url
      .query_pairs_mut()
      .append_pair("search_query", &self.query)
      .append_pair("start", "0")
      .append_pair("max_results", &self.max_results.to_string())
      .append_pair("sortBy", "lastUpdatedDate")
      .append_pair("sortOrder", "descending");
    Ok(url)
  }
}
