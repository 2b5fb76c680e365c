//! Client implementation for fetching recent papers from arXiv.org.
//!
//! This module owns the whole fetch-and-normalize pass: it expands a
//! [`SearchQuery`] into the request URL, performs the single GET against the
//! Atom endpoint, and converts the response entries into [`Paper`] records.
//! It deliberately makes exactly one attempt per run — no retries, no
//! pagination — since a snapshot is either fresh or replaced wholesale by
//! the next run.
//!
//! # Examples
//!
//! ```no_run
//! use arxiv_feed::{client::ArxivClient, query::SearchQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new()?;
//! let papers = client.fetch(&SearchQuery::new("all:machine learning", 20)).await?;
//!
//! println!("fetched {} papers", papers.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use quick_xml::de::from_str;
use reqwest::{header, Client};

use super::*;

/// Default endpoint of the arXiv query API.
pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// Identifying header sent with every request, per arXiv's API etiquette.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Hard bound on the single fetch attempt, connection included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Feed {
  /// A `Feed` may contain any number of `Entry`s, including none.
  #[serde(rename = "entry")]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
///
/// Only the subset of the entry the snapshot schema needs is captured;
/// links, categories, comments, and the rest of the metadata are ignored.
/// Every field defaults, so a sparse entry degrades to empty strings
/// instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
  /// Canonical identifier URL (e.g., "http://arxiv.org/abs/2301.07041v1").
  id:      String,
  /// Paper title (may contain LaTeX markup), often hard-wrapped by the API.
  title:   String,
  /// Paper abstract (may contain LaTeX markup).
  summary: String,
  /// Last-updated timestamp in the feed's native format.
  updated: String,
  /// List of paper authors.
  #[serde(rename = "author")]
  authors: Vec<Author>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Author {
  /// Author's full name; empty when the element carries no name.
  name: String,
}

impl From<Entry> for Paper {
  fn from(entry: Entry) -> Self {
    let id = clean_text(&entry.id);
    let pdf = pdf_link(&id);
    let authors = entry
      .authors
      .into_iter()
      .map(|author| clean_text(&author.name))
      .filter(|name| !name.is_empty())
      .collect();

    Paper {
      id,
      title: clean_text(&entry.title),
      summary: clean_text(&entry.summary),
      authors,
      updated: clean_text(&entry.updated),
      pdf,
    }
  }
}

/// Parses a raw Atom document into normalized papers, in document order.
///
/// Document order is the API's own ordering (most recently updated first for
/// the URLs this library builds) and is preserved as-is. Entries with missing
/// text fields come through with empty strings, and author elements without
/// a name are skipped; only a document the deserializer cannot make sense of
/// fails.
///
/// # Examples
///
/// ```
/// use arxiv_feed::client::parse_feed;
///
/// let papers = parse_feed(
///   r"<feed xmlns='http://www.w3.org/2005/Atom'>
///       <entry>
///         <id>http://arxiv.org/abs/2301.07041v1</id>
///         <title>Verifiable Fully Homomorphic Encryption</title>
///         <author><name>Alexander Viand</name></author>
///       </entry>
///     </feed>",
/// )?;
///
/// assert_eq!(papers.len(), 1);
/// assert_eq!(papers[0].pdf, "http://arxiv.org/pdf/2301.07041v1.pdf");
/// # Ok::<(), arxiv_feed::errors::FeedError>(())
/// ```
pub fn parse_feed(xml: &str) -> Result<Vec<Paper>, FeedError> {
  let feed: Feed = from_str(xml)?;
  Ok(feed.entries.into_iter().map(Paper::from).collect())
}

/// Client for fetching recent papers from the arXiv query API.
///
/// Wraps a [`reqwest::Client`] built with the strongest trust context
/// available and the endpoint queries run against. The endpoint is
/// configurable so mirrors and tests can stand in for arxiv.org.
pub struct ArxivClient {
  /// Internal web client used to connect to the API.
  client:   Client,
  /// Endpoint the request URL is built against.
  base_url: String,
}

impl ArxivClient {
  /// Creates a client against the public arXiv endpoint.
  pub fn new() -> Result<Self, FeedError> { Self::with_base_url(ARXIV_API_URL) }

  /// Creates a client against a custom endpoint.
  pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FeedError> {
    Ok(Self { client: build_http_client()?, base_url: base_url.into() })
  }

  /// Fetches and normalizes the papers matching `query`.
  ///
  /// Performs exactly one GET carrying the identifying `User-Agent` header,
  /// bounded by a 30 second timeout. A transport failure, a non-success
  /// status, and a malformed response body are all reported through
  /// [`FeedError`]; callers treat them as the same failed-fetch outcome.
  pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Paper>, FeedError> {
    let url = query.to_url(&self.base_url)?;

    debug!("Fetching from arXiv via: {url}");

    let response = self
      .client
      .get(url)
      .header(header::USER_AGENT, USER_AGENT)
      .timeout(FETCH_TIMEOUT)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(FeedError::ApiError(format!("arXiv returned HTTP {status}")));
    }

    let body = response.text().await?;

    trace!("arXiv response: {body}");

    parse_feed(&body)
  }
}

/// Builds the HTTP client behind every fetch.
///
/// Trust contexts are tried in a fixed order, strongest first: the bundled
/// webpki root store, then the platform's native store, then whatever the
/// stack defaults to. The first constructor that succeeds wins; if all three
/// fail, the last error surfaces as an ordinary fetch failure.
fn build_http_client() -> Result<Client, reqwest::Error> {
  let constructors: [fn() -> Result<Client, reqwest::Error>; 3] = [
    || Client::builder().use_rustls_tls().build(),
    || Client::builder().use_native_tls().build(),
    || Client::builder().build(),
  ];

  let mut result = constructors[0]();
  for construct in &constructors[1..] {
    match result {
      Ok(client) => return Ok(client),
      Err(err) => {
        debug!("trust context unavailable, falling back: {err}");
        result = construct();
      },
    }
  }
  result
}
