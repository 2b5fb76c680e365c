//! Error types for the arxiv-feed library.
//!
//! One enum covers every failure mode in the fetch-and-write pass:
//! - Network and API errors
//! - Atom document parsing
//! - Snapshot serialization and file system operations
//!
//! Callers on the fetch side usually collapse all of these into the same
//! degraded outcome (a fallback snapshot); the variants exist so logs and
//! tests can tell the failure classes apart.
//!
//! # Examples
//!
//! ```
//! use arxiv_feed::{client::ArxivClient, errors::FeedError, query::SearchQuery};
//!
//! # async fn example() -> Result<(), FeedError> {
//! let client = ArxivClient::new()?;
//! match client.fetch(&SearchQuery::new("all:electron", 5)).await {
//!   Ok(papers) => println!("fetched {} papers", papers.len()),
//!   Err(FeedError::Network(e)) => println!("transport failed: {}", e),
//!   Err(FeedError::ApiError(msg)) => println!("API rejected the request: {}", msg),
//!   Err(e) => println!("other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Errors that can occur while fetching the feed or writing a snapshot.
///
/// Variants wrap the underlying library errors transparently where one
/// exists, so the original error text survives all the way into the fallback
/// snapshot's `error` field.
#[derive(Error, Debug)]
pub enum FeedError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable or the host is unreachable
  /// - The request exceeds the fetch timeout
  /// - No TLS trust context could be established
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API answered with a non-success HTTP status.
  ///
  /// The string parameter carries the status line for the fallback record
  /// and the logs.
  #[error("API error: {0}")]
  ApiError(String),

  /// The response body was not a well-formed Atom document.
  ///
  /// Missing elements never trigger this; only XML the deserializer cannot
  /// make sense of does.
  #[error("failed to parse feed: {0}")]
  Parse(#[from] quick_xml::DeError),

  /// An endpoint URL couldn't be parsed.
  ///
  /// Seen only with overridden endpoints; the built-in default is valid.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// A file system operation failed while writing the snapshot.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// Snapshot serialization failed.
  ///
  /// Practically unreachable for this schema, but kept explicit so the
  /// write path propagates instead of panicking.
  #[error(transparent)]
  Serialize(#[from] serde_json::Error),
}
