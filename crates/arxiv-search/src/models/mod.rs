//! Data models for arXiv entities.
//!
//! Records are built once from a feed entry and serialize with the field
//! names used by `--json` output.

pub mod identifier;
mod paper;

pub use identifier::{abs_url, file_stem, id_from_entry_id, normalize_id, pdf_url, resolve_pdf_url};
pub use paper::{DownloadedPdf, PaperRecord};
