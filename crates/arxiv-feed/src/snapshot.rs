//! Snapshot construction and persistence.
//!
//! A [`Snapshot`] is the single output artifact of a run: the query it was
//! built from, when it was captured, and the normalized papers — or, on a
//! failed run, an error description and no papers. Snapshots are created,
//! written once, and forgotten; runs never read previous output back.
//!
//! # Examples
//!
//! ```
//! use arxiv_feed::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::new("cat:cs.AI", vec![]);
//! assert!(snapshot.error.is_none());
//!
//! let fallback = Snapshot::fallback("cat:cs.AI", "connection refused");
//! assert!(fallback.papers.is_empty());
//! ```

use std::{fs, path::Path};

use super::*;

/// Directory prefix that marks a destination as published site data.
pub const PUBLISH_DIR: &str = "docs";

/// Fixed root-level path of the best-effort preview copy.
pub const PREVIEW_PATH: &str = "arxiv_data.json";

/// The full output payload of one fetch run.
///
/// Field declaration order is serialization order and part of the output
/// contract: `query`, `fetched_at`, then `error` (fallback records only),
/// then `papers`. Nothing mutates a snapshot after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
  /// The raw query expression this snapshot answers.
  pub query:      String,
  /// Capture time in seconds since the Unix epoch.
  pub fetched_at: i64,
  /// Failure description; present only on fallback records.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error:      Option<String>,
  /// Normalized papers in feed order; empty on fallback records.
  pub papers:     Vec<Paper>,
}

impl Snapshot {
  /// Builds a snapshot of `papers` captured now.
  pub fn new(query: impl Into<String>, papers: Vec<Paper>) -> Self {
    Self { query: query.into(), fetched_at: Utc::now().timestamp(), error: None, papers }
  }

  /// Builds the degraded record written when the fetch-or-parse pass failed.
  ///
  /// Carries the failure text in `error` and an empty paper list, so
  /// consumers always find a valid file with the keys they expect.
  pub fn fallback(query: impl Into<String>, error: impl Into<String>) -> Self {
    Self {
      query:      query.into(),
      fetched_at: Utc::now().timestamp(),
      error:      Some(error.into()),
      papers:     Vec::new(),
    }
  }

  /// Writes the snapshot as pretty-printed JSON, creating missing parent
  /// directories first.
  ///
  /// Non-ASCII text is preserved literally and key order follows the struct
  /// declaration, so consumers see a stable schema. The write itself is a
  /// single call, which is as much atomicity as the single-writer batch
  /// context needs; there is no protection against concurrent writers.
  pub fn write(&self, path: &Path) -> Result<(), FeedError> {
    if let Some(parent) = path.parent() {
      // A bare filename has `Some("")` as its parent; nothing to create then.
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }

    debug!("Writing snapshot to: {}", path.display());

    fs::write(path, serde_json::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Writes the snapshot and, for published destinations, a preview copy.
  ///
  /// When `path` sits under the published-output directory (`docs/`), an
  /// identical copy lands at the fixed root-level [`PREVIEW_PATH`] so the
  /// data can be inspected without serving the site. The preview write is
  /// best-effort: its error is logged and discarded, and it never affects
  /// the primary write's result.
  pub fn publish(&self, path: &Path) -> Result<(), FeedError> {
    self.write(path)?;

    if path.starts_with(PUBLISH_DIR) {
      if let Err(err) = self.write(Path::new(PREVIEW_PATH)) {
        debug!("Skipping preview copy: {err}");
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use serial_test::serial;
  use tempfile::tempdir;

  use super::*;

  fn sample_paper() -> Paper {
    Paper {
      id:      "http://arxiv.org/abs/2301.07041v1".into(),
      title:   "Verifiable Fully Homomorphic Encryption".into(),
      summary: "Schrödinger-grade summary with ünïcode.".into(),
      authors: vec!["Alexander Viand".into(), "Christian Knabenhans".into()],
      updated: "2023-01-17T14:05:52Z".into(),
      pdf:     "http://arxiv.org/pdf/2301.07041v1.pdf".into(),
    }
  }

  #[test]
  fn test_write_creates_parents_and_round_trips() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested/out/arxiv_data.json");

    let snapshot = Snapshot::new("all:machine learning", vec![sample_paper()]);
    snapshot.write(&path)?;

    let restored: Snapshot = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(restored.query, snapshot.query);
    assert_eq!(restored.fetched_at, snapshot.fetched_at);
    assert_eq!(restored.error, None);
    assert_eq!(restored.papers, snapshot.papers);
    Ok(())
  }

  #[test]
  fn test_write_accepts_a_bare_filename() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arxiv_data.json");

    Snapshot::new("all:machine learning", vec![]).write(&path)?;

    assert!(path.exists());
    Ok(())
  }

  #[test]
  fn test_serialized_form_is_stable_and_literal() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arxiv_data.json");

    Snapshot::new("all:machine learning", vec![sample_paper()]).write(&path)?;

    let raw = fs::read_to_string(&path)?;
    assert!(!raw.contains("\"error\""));
    assert!(raw.contains("Schrödinger"));

    let query_at = raw.find("\"query\"").unwrap();
    let fetched_at = raw.find("\"fetched_at\"").unwrap();
    let papers_at = raw.find("\"papers\"").unwrap();
    assert!(query_at < fetched_at && fetched_at < papers_at);
    Ok(())
  }

  #[test]
  fn test_fallback_record_shape() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("arxiv_data.json");

    Snapshot::fallback("all:machine learning", "connection refused").write(&path)?;

    let raw = fs::read_to_string(&path)?;
    let restored: Snapshot = serde_json::from_str(&raw)?;
    assert_eq!(restored.error.as_deref(), Some("connection refused"));
    assert!(restored.papers.is_empty());

    let error_at = raw.find("\"error\"").unwrap();
    assert!(raw.find("\"fetched_at\"").unwrap() < error_at);
    assert!(error_at < raw.find("\"papers\"").unwrap());
    Ok(())
  }

  #[test]
  #[serial]
  fn test_publish_under_docs_writes_preview_copy() -> anyhow::Result<()> {
    let dir = tempdir()?;
    std::env::set_current_dir(dir.path())?;

    let snapshot = Snapshot::new("all:machine learning", vec![sample_paper()]);
    snapshot.publish(Path::new("docs/arxiv_data.json"))?;

    let primary = fs::read_to_string("docs/arxiv_data.json")?;
    let preview = fs::read_to_string(PREVIEW_PATH)?;
    assert_eq!(primary, preview);
    Ok(())
  }

  #[test]
  #[serial]
  fn test_publish_elsewhere_writes_no_preview_copy() -> anyhow::Result<()> {
    let dir = tempdir()?;
    std::env::set_current_dir(dir.path())?;

    Snapshot::new("all:machine learning", vec![]).publish(Path::new("data/arxiv_data.json"))?;

    assert!(Path::new("data/arxiv_data.json").exists());
    assert!(!Path::new(PREVIEW_PATH).exists());
    Ok(())
  }
}
