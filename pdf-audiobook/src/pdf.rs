//! PDF text extraction.

use anyhow::Result;
use std::path::Path;

/// Extract the text content of a PDF as a single string.
///
/// Pages are extracted in document order, trimmed, and joined with
/// blank lines. Pages with no text (images, blanks) are skipped.
pub fn extract_text(path: &Path) -> Result<String> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| anyhow::anyhow!("Failed to extract text from {}: {}", path.display(), e))?;

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
