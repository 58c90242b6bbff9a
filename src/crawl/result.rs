// src/crawl/result.rs
// =============================================================================
// The value a crawl returns: page path -> local assets on that page.
//
// Pages appear in the order they were visited, and serialize to JSON as an
// object with the same key order:
//
//   {
//     "/index.html": ["/assets/logo.png", "/assets/app.css"],
//     "/about.html": []
//   }
//
// Pages that failed to fetch have no entry.
// =============================================================================

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CrawlResult {
    pages: IndexMap<String, Vec<String>>,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, assets: Vec<String>) {
        self.pages.insert(path.into(), assets);
    }

    /// Assets of one page, or `None` if the page was not visited successfully.
    pub fn assets(&self, path: &str) -> Option<&[String]> {
        self.pages.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pages
            .iter()
            .map(|(path, assets)| (path.as_str(), assets.as_slice()))
    }

    pub fn asset_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
