// src/extract/assets.rs
// =============================================================================
// This module finds the static assets a page references.
//
// An asset is one of:
// - <img src="...">
// - <link href="...">
// - <script src="...">
//
// and it counts only when its URL is local to the host: "/assets/app.js" is
// kept, "//cdn.example.com/app.js" and "/" are not.
//
// Results are grouped by rule: every matching img first, then every link,
// then every script. Inside a group, document order is kept.
// =============================================================================

use crate::document::{Document, Element};
use crate::error::ExtractionError;

/// Which attribute of which element names an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRule {
    pub tag: &'static str,
    pub attribute: &'static str,
}

/// The asset rules, in the order their matches appear in the output.
pub const ASSET_RULES: [AssetRule; 3] = [
    AssetRule { tag: "img", attribute: "src" },
    AssetRule { tag: "link", attribute: "href" },
    AssetRule { tag: "script", attribute: "src" },
];

// Extracts the local asset URLs of a page
//
// Example:
//   <script src="/app.js"> <img src="/logo.png"> <link href="/app.css">
//   result = ["/logo.png", "/app.css", "/app.js"]
pub fn extract_assets<D: Document>(document: &D) -> Result<Vec<String>, ExtractionError> {
    let mut assets = Vec::new();

    for rule in &ASSET_RULES {
        for element in document.find_elements(rule.tag)? {
            // Inline scripts have no src; they are not recorded at all
            if let Some(source) = element.attribute(rule.attribute) {
                if is_local_asset(source) {
                    assets.push(source.to_string());
                }
            }
        }
    }

    Ok(assets)
}

// True when `source` is "/" followed by any character except another "/"
pub fn is_local_asset(source: &str) -> bool {
    let mut chars = source.chars();
    chars.next() == Some('/') && matches!(chars.next(), Some(c) if c != '/')
}
