//! arXiv identifier normalization and URL derivation.

/// Host that serves abstract pages and PDFs.
pub const ARXIV_HOST: &str = "https://arxiv.org";

const ABS_MARKER: &str = "/abs/";
const ARXIV_PREFIX: &str = "arxiv:";

/// Normalize a user-supplied identifier.
///
/// Trims surrounding whitespace and any leading `arXiv:` prefixes (any case).
/// Applying it to an already-normalized id returns the id unchanged.
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    let mut id = raw.trim();
    while let Some(rest) = strip_arxiv_prefix(id) {
        id = rest.trim();
    }
    id.to_string()
}

fn strip_arxiv_prefix(id: &str) -> Option<&str> {
    id.get(..ARXIV_PREFIX.len())
        .filter(|head| head.eq_ignore_ascii_case(ARXIV_PREFIX))
        .map(|_| &id[ARXIV_PREFIX.len()..])
}

/// Extract the bare identifier from a feed entry's `<id>` text.
///
/// `http://arxiv.org/abs/2301.00001v2` becomes `2301.00001v2`. Text without
/// `/abs/` is returned as is.
#[must_use]
pub fn id_from_entry_id(entry_id: &str) -> &str {
    entry_id
        .rfind(ABS_MARKER)
        .map_or(entry_id, |pos| &entry_id[pos + ABS_MARKER.len()..])
}

/// PDF location for a bare identifier.
#[must_use]
pub fn pdf_url(id: &str) -> String {
    format!("{ARXIV_HOST}/pdf/{id}.pdf")
}

/// Abstract page for a bare identifier.
#[must_use]
pub fn abs_url(id: &str) -> String {
    format!("{ARXIV_HOST}/abs/{id}")
}

/// Normalize `raw` and derive its PDF URL. No network access.
#[must_use]
pub fn resolve_pdf_url(raw: &str) -> String {
    pdf_url(&normalize_id(raw))
}

/// Filesystem-safe file stem for an identifier.
///
/// Old-style ids such as `hep-th/9901001` contain a slash.
#[must_use]
pub fn file_stem(id: &str) -> String {
    id.replace(['/', ':'], "_")
}
