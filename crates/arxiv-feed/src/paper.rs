//! The normalized paper record and the text cleanup that produces it.
//!
//! [`Paper`] is the shape downstream consumers read out of the snapshot
//! file: six keys, always present, never null. Field declaration order here
//! is key order in the serialized JSON, so it stays `id`, `title`,
//! `summary`, `authors`, `updated`, `pdf`.

use lazy_static::lazy_static;
use regex::Regex;

use super::*;

lazy_static! {
  /// A whitespace run containing at least one line break, as produced by the
  /// feed's hard-wrapped titles and abstracts.
  static ref WRAPPED_LINE: Regex = Regex::new(r"\s*\n\s*").unwrap();
}

/// One normalized paper extracted from the feed.
///
/// Every field falls back to an empty string or empty list when the source
/// element is absent or empty. Consumers rely on the keys always being
/// present with those defaults, so none of the fields is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
  /// Canonical identifier URL, e.g. `http://arxiv.org/abs/2301.07041v1`.
  pub id:      String,
  /// Paper title; may contain LaTeX markup, which is preserved.
  pub title:   String,
  /// Paper abstract; may contain LaTeX markup, which is preserved.
  pub summary: String,
  /// Author names in feed order.
  pub authors: Vec<String>,
  /// Last-updated timestamp exactly as the feed reported it.
  pub updated: String,
  /// Direct PDF link derived from [`Paper::id`]; empty when `id` is empty.
  pub pdf:     String,
}

/// Normalizes a text field from the feed.
///
/// Trims leading and trailing whitespace, then collapses every internal
/// whitespace run that contains a newline into a single space. That undoes
/// the feed's newline-plus-indent wrapping without touching deliberate
/// spacing elsewhere in the text.
///
/// # Examples
///
/// ```
/// use arxiv_feed::paper::clean_text;
///
/// assert_eq!(clean_text(" Attention Is\n   All You Need\n"), "Attention Is All You Need");
/// assert_eq!(clean_text("double  spaced"), "double  spaced");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(text: &str) -> String {
  WRAPPED_LINE.replace_all(text.trim(), " ").into_owned()
}

/// Derives the direct PDF link from an identifier URL.
///
/// Substitutes the abstract-view path segment with the direct-document one
/// and appends a `.pdf` suffix when missing. An empty identifier yields an
/// empty link, and a link already ending in `.pdf` is left untouched.
///
/// # Examples
///
/// ```
/// use arxiv_feed::paper::pdf_link;
///
/// assert_eq!(pdf_link("http://arxiv.org/abs/1234.56789v2"), "http://arxiv.org/pdf/1234.56789v2.pdf");
/// assert_eq!(pdf_link(""), "");
/// ```
pub fn pdf_link(id: &str) -> String {
  let link = id.replace("/abs/", "/pdf/");
  if link.is_empty() || link.ends_with(".pdf") {
    link
  } else {
    link + ".pdf"
  }
}
