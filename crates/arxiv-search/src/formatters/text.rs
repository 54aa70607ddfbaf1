//! Human-readable text output.

use crate::models::{DownloadedPdf, PaperRecord};

/// Authors shown per paper in search listings.
const LISTING_AUTHORS: usize = 3;

/// Categories shown per paper in search listings.
const LISTING_CATEGORIES: usize = 2;

/// Format search results as a numbered listing.
#[must_use]
pub fn format_search_results(papers: &[PaperRecord]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let blocks = papers
        .iter()
        .enumerate()
        .map(|(i, paper)| format_listing(paper, i + 1))
        .collect::<Vec<_>>();

    format!("Found {} papers:\n\n{}", papers.len(), blocks.join("\n\n"))
}

fn format_listing(paper: &PaperRecord, index: usize) -> String {
    let categories = paper
        .categories()
        .iter()
        .take(LISTING_CATEGORIES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{index}. {}\n   Authors: {}\n   arXiv: {} | {categories} | {}\n   PDF: {}",
        paper.title(),
        paper.short_author_list(LISTING_AUTHORS),
        paper.id(),
        paper.published(),
        paper.pdf_url(),
    )
}

/// Format every field of one paper.
#[must_use]
pub fn format_details(paper: &PaperRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Title: {}\n\n", paper.title()));
    output.push_str(&format!("Authors: {}\n\n", paper.author_names()));
    output.push_str(&format!("arXiv ID: {}\n", paper.id()));
    output.push_str(&format!("Categories: {}\n", paper.categories().join(", ")));
    output.push_str(&format!("Published: {}\n\n", paper.published()));
    output.push_str(&format!("Abstract:\n{}\n\n", paper.r#abstract()));
    output.push_str(&format!("PDF: {}\n", paper.pdf_url()));
    output.push_str(&format!("Page: {}", paper.abs_url()));

    output
}

/// One-line download summary.
#[must_use]
pub fn format_download(download: &DownloadedPdf) -> String {
    format!(
        "Downloaded: {} ({} bytes)",
        download.path.display(),
        group_thousands(download.bytes)
    )
}

/// `1234567` -> `1,234,567`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
