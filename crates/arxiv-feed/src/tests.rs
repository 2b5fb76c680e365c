use std::fs;

use tempfile::tempdir;

use super::*;
use crate::{client::parse_feed, snapshot::Snapshot};

/// Single-entry response exercising hard wrapping, escaped entities, and
/// non-ASCII names end to end.
const QUERY_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=cat:math.PR</title>
  <entry>
    <id>http://arxiv.org/abs/2404.12345v1</id>
    <updated>2024-04-20T09:30:00Z</updated>
    <title>Couplings, Martingales,
  &amp; Concentration</title>
    <summary>  We revisit Azuma--Hoeffding
  bounds for dependent sequences.  </summary>
    <author><name>Émile Borel</name></author>
    <author><name>Paul Lévy</name></author>
  </entry>
</feed>"#;

#[traced_test]
#[test]
fn test_feed_to_snapshot_file_round_trip() -> anyhow::Result<()> {
  let papers = parse_feed(QUERY_RESPONSE)?;

  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].title, "Couplings, Martingales, & Concentration");
  assert_eq!(papers[0].summary, "We revisit Azuma--Hoeffding bounds for dependent sequences.");
  assert_eq!(papers[0].authors, vec!["Émile Borel", "Paul Lévy"]);

  let dir = tempdir()?;
  let path = dir.path().join("docs/arxiv_data.json");
  let snapshot = Snapshot::new("cat:math.PR", papers);
  snapshot.write(&path)?;

  let raw = fs::read_to_string(&path)?;
  assert!(raw.contains("Émile Borel"));

  let restored: Snapshot = serde_json::from_str(&raw)?;
  assert_eq!(restored.query, "cat:math.PR");
  assert!(restored.error.is_none());
  assert_eq!(restored.papers, snapshot.papers);
  Ok(())
}
