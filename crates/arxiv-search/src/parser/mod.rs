//! Atom feed decoding.
//!
//! A feed is read into an element tree first; a broken document fails as a
//! whole with [`FeedError`](crate::error::FeedError). Each `entry` is then
//! extracted on its own, and entries that cannot produce a record are
//! skipped without affecting the rest of the feed.

mod xml;

use std::fmt;

pub use xml::{Element, Namespace, parse_document};

use crate::error::FeedResult;
use crate::models::{PaperRecord, id_from_entry_id};

/// Why an entry produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The `<id>` element is absent or yields an empty identifier.
    MissingId,
    /// Text or attributes inside the entry could not be decoded.
    Undecodable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => f.write_str("missing identifier"),
            Self::Undecodable => f.write_str("undecodable content"),
        }
    }
}

/// Result of extracting one feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Parsed(PaperRecord),
    Skip(SkipReason),
}

impl EntryOutcome {
    /// The record, if extraction succeeded.
    #[must_use]
    pub fn into_record(self) -> Option<PaperRecord> {
        match self {
            Self::Parsed(record) => Some(record),
            Self::Skip(_) => None,
        }
    }
}

/// Decode an arXiv Atom feed into records, in feed order.
///
/// Only `entry` elements directly under the root are considered.
pub fn parse_feed(bytes: &[u8]) -> FeedResult<Vec<PaperRecord>> {
    let root = parse_document(bytes)?;

    let papers = root
        .children_named(Namespace::Atom, "entry")
        .enumerate()
        .filter_map(|(index, entry)| match parse_entry(entry) {
            EntryOutcome::Parsed(record) => Some(record),
            EntryOutcome::Skip(reason) => {
                tracing::debug!(index, %reason, "Skipping feed entry");
                None
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = papers.len(), "Parsed feed");
    Ok(papers)
}

/// Extract a record from one `entry` element.
#[must_use]
pub fn parse_entry(entry: &Element) -> EntryOutcome {
    if !entry.is_intact() {
        return EntryOutcome::Skip(SkipReason::Undecodable);
    }

    let id = id_from_entry_id(text_field(entry, Namespace::Atom, "id"));

    let authors = entry
        .children_named(Namespace::Atom, "author")
        .filter_map(|author| author.child_text(Namespace::Atom, "name"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let published = text_field(entry, Namespace::Atom, "published").chars().take(10).collect::<String>();

    PaperRecord::new(
        id,
        single_line(text_field(entry, Namespace::Atom, "title")),
        authors,
        single_line(text_field(entry, Namespace::Atom, "summary")),
        categories(entry),
        published,
    )
    .map_or(EntryOutcome::Skip(SkipReason::MissingId), EntryOutcome::Parsed)
}

/// Primary category first, then the Atom category terms.
///
/// [`PaperRecord::new`] drops empty and repeated terms.
fn categories(entry: &Element) -> Vec<String> {
    let primary = entry
        .child(Namespace::Arxiv, "primary_category")
        .and_then(|c| c.attribute("term"));
    let terms = entry
        .children_named(Namespace::Atom, "category")
        .filter_map(|c| c.attribute("term"));

    primary.into_iter().chain(terms).map(str::to_string).collect()
}

fn text_field<'a>(entry: &'a Element, ns: Namespace, tag: &str) -> &'a str {
    entry.child_text(ns, tag).unwrap_or_default()
}

fn single_line(text: &str) -> String {
    text.replace('\n', " ")
}
