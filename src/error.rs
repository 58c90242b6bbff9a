// src/error.rs
// =============================================================================
// Error types for the crawler core.
//
// - FetchError: one page could not be fetched or read. The crawler catches it,
//   logs it, and moves on to the next path.
// - ExtractionError: the document could not be queried. This one escapes
//   `Crawler::crawl` because it means a collaborator is broken, not a page.
// - CrawlError: everything that can escape a crawl.
//
// The binary (main.rs) uses anyhow on top of these, like before.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Cannot query elements with tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },
}

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
