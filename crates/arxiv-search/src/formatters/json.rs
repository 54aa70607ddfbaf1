//! JSON output formatting.
//!
//! Output is rendered in full before anything is printed, so a failure never
//! leaves partial JSON on stdout.

use crate::models::PaperRecord;

/// Pretty-printed JSON array of records.
pub fn papers_json(papers: &[PaperRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(papers)
}

/// Pretty-printed JSON object for one record.
pub fn paper_json(paper: &PaperRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(paper)
}
