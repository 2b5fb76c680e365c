//! Error types for the arxiv-fetch CLI.
//!
//! Failures on the fetch-or-parse path never show up here — the CLI
//! collapses those into the fallback snapshot and still exits cleanly. What
//! remains is the configuration layer and the primary snapshot write, both
//! wrapped so the original error text reaches the user.

use thiserror::Error;

/// Errors that can terminate a CLI run unsuccessfully.
#[derive(Error, Debug)]
pub enum ArxivFetchErrors {
  /// Errors from the underlying arxiv-feed library, i.e. a failed primary
  /// snapshot write.
  #[error(transparent)]
  Feed(#[from] arxiv_feed::errors::FeedError),

  /// The `MAX_RESULTS` environment variable was not a non-negative integer.
  #[error("invalid MAX_RESULTS value: {0}")]
  InvalidMaxResults(#[from] std::num::ParseIntError),
}
