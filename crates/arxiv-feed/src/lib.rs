//! A library for fetching recent paper metadata from the arXiv query API and
//! writing it out as a pretty-printed JSON snapshot for downstream display.
//!
//! The whole flow is a single pass: build an encoded search URL, perform one
//! GET against the Atom endpoint, normalize the entries, and persist a
//! [`snapshot::Snapshot`]. Runs never read previous output back; each run
//! replaces the file wholesale.
//!
//! # Example
//! ```rust,no_run
//! use std::path::Path;
//!
//! use arxiv_feed::{client::ArxivClient, query::SearchQuery, snapshot::Snapshot};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let query = SearchQuery::new("cat:cs.AI OR all:machine learning", 20);
//!   let papers = ArxivClient::new()?.fetch(&query).await?;
//!
//!   Snapshot::new(query.query, papers).publish(Path::new("docs/arxiv_data.json"))?;
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod client;
pub mod errors;
pub mod paper;
pub mod query;
pub mod snapshot;
#[cfg(test)] mod tests;

use errors::FeedError;
use paper::{clean_text, pdf_link, Paper};
use query::SearchQuery;
