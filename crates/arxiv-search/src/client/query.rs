//! Search query construction for the arXiv API.

use url::Url;

/// Combine a free-text query with category filters.
///
/// With filters the result is `(query) AND (cat:A OR cat:B)`, keeping the
/// order of `categories`; the parentheses are required for API precedence.
#[must_use]
pub fn build_search_query<S: AsRef<str>>(query: &str, categories: &[S]) -> String {
    if categories.is_empty() {
        return query.to_string();
    }

    let filter = categories
        .iter()
        .map(|cat| format!("cat:{}", cat.as_ref()))
        .collect::<Vec<_>>()
        .join(" OR ");

    format!("({query}) AND ({filter})")
}

/// Query for a single paper by identifier.
#[must_use]
pub fn id_query(id: &str) -> String {
    format!("id:{id}")
}

/// Full request URL with form-encoded parameters.
///
/// Parameter order: `search_query`, `start`, `max_results`, `sortBy`, `sortOrder`.
pub fn search_url(base: &str, search_query: &str, max_results: u32) -> Result<Url, url::ParseError> {
    let max_results = max_results.to_string();
    Url::parse_with_params(
        base,
        [
            ("search_query", search_query),
            ("start", "0"),
            ("max_results", max_results.as_str()),
            ("sortBy", "relevance"),
            ("sortOrder", "descending"),
        ],
    )
}

/// Split a comma-separated category list, dropping blanks.
#[must_use]
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|c| !c.is_empty()).map(str::to_string).collect()
}
