//! Output formatting for CLI results.

pub mod json;
pub mod text;

pub use json::{paper_json, papers_json};
pub use text::{format_details, format_download, format_search_results, group_thousands};
