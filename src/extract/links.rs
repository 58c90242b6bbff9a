// src/extract/links.rs
// =============================================================================
// This module extracts the links the crawler should follow from a page.
//
// Only root-relative links are kept: "/docs" stays on the same host, while
// "https://other.com", "docs" and "#top" do not. Nothing is resolved or
// normalized; the href string is used exactly as written.
// =============================================================================

use crate::document::{Document, Element};
use crate::error::ExtractionError;

// Extracts every root-relative <a href> target from a page
//
// Returns: Vec<String> in document order, duplicates included.
// Deduplication is the queue's job.
//
// Example:
//   <a href="/a.html"> <a href="https://x.com"> <a href="/a.html">
//   result = ["/a.html", "/a.html"]
pub fn extract_links<D: Document>(document: &D) -> Result<Vec<String>, ExtractionError> {
    let mut links = Vec::new();

    for element in document.find_elements("a")? {
        // Anchors without href (named anchors, placeholders) are skipped
        if let Some(href) = element.attribute("href") {
            if is_root_relative(href) {
                links.push(href.to_string());
            }
        }
    }

    Ok(links)
}

// True when `href` starts with a slash.
// "//host/path" passes as well; only the first character is checked.
pub fn is_root_relative(href: &str) -> bool {
    href.starts_with('/')
}
