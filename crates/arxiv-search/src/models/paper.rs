//! Paper record produced from an arXiv feed entry.

use serde::Serialize;

use super::identifier;

/// A paper from the arXiv API.
///
/// Immutable once built. `pdf_url` and `abs_url` are derived from `id` in
/// [`PaperRecord::new`] and cannot be set on their own. A record always has a
/// non-empty `id` and no empty or repeated categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    /// Bare arXiv identifier, possibly versioned (`2301.00001v2`).
    id: String,

    /// Title with newlines replaced by spaces.
    title: String,

    /// Author names in feed order.
    authors: Vec<String>,

    /// Abstract with newlines replaced by spaces.
    r#abstract: String,

    /// Primary category first, then cross-lists, without duplicates.
    categories: Vec<String>,

    /// Publication date (YYYY-MM-DD).
    published: String,

    /// Direct PDF link.
    pdf_url: String,

    /// Abstract page link.
    abs_url: String,
}

impl PaperRecord {
    /// Build a record, deriving both URLs from `id`.
    ///
    /// Returns `None` for an empty `id`. Empty categories are dropped and
    /// repeats keep their first position, so the first category given stays
    /// the primary one.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: Vec<String>,
        r#abstract: impl Into<String>,
        categories: Vec<String>,
        published: impl Into<String>,
    ) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }

        let mut unique: Vec<String> = Vec::with_capacity(categories.len());
        for category in categories {
            if !category.is_empty() && !unique.contains(&category) {
                unique.push(category);
            }
        }

        Some(Self {
            pdf_url: identifier::pdf_url(&id),
            abs_url: identifier::abs_url(&id),
            id,
            title: title.into(),
            authors,
            r#abstract: r#abstract.into(),
            categories: unique,
            published: published.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    #[must_use]
    pub fn r#abstract(&self) -> &str {
        &self.r#abstract
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn published(&self) -> &str {
        &self.published
    }

    #[must_use]
    pub fn pdf_url(&self) -> &str {
        &self.pdf_url
    }

    #[must_use]
    pub fn abs_url(&self) -> &str {
        &self.abs_url
    }

    /// Primary category, if the feed provided any category.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Up to `limit` author names, with ` et al.` appended when some were cut.
    #[must_use]
    pub fn short_author_list(&self, limit: usize) -> String {
        let shown = self.authors.iter().take(limit).map(String::as_str).collect::<Vec<_>>();
        let mut names = shown.join(", ");
        if self.authors.len() > limit {
            names.push_str(" et al.");
        }
        names
    }
}

/// A PDF written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedPdf {
    /// Destination file.
    pub path: std::path::PathBuf,

    /// Number of bytes written.
    pub bytes: u64,
}
