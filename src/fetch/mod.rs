// src/fetch/mod.rs
// =============================================================================
// This module turns (host, path) into a parsed page.
//
// Submodules:
// - http: GET over HTTP/HTTPS with reqwest
// - file: read straight from the local filesystem (handy for auditing a
//   static site build before it is deployed)
//
// HostFetcher picks one of the two by looking at the host string, so the CLI
// does not need to care.
//
// Rust concepts:
// - async-trait: async methods in a trait
// - Associated types: each fetcher says which Document type it produces
// =============================================================================

mod file;
mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use async_trait::async_trait;
use std::time::Duration;

use crate::document::{Document, HtmlDocument};
use crate::error::FetchError;

/// Fetches and parses one page of a host.
///
/// The crawler awaits one call at a time, so implementations do not need to
/// be `Send`; scraper's `Html` is not.
#[async_trait(?Send)]
pub trait Fetcher {
    type Document: Document;

    /// Resolves `host + path` and parses the result.
    async fn open(&self, host: &str, path: &str) -> Result<Self::Document, FetchError>;
}

/// Fetcher chosen from the shape of the host string.
pub enum HostFetcher {
    Http(HttpFetcher),
    File(FileFetcher),
}

impl HostFetcher {
    // "http://..." and "https://..." go over the network, anything else is a
    // directory on disk
    pub fn for_host(host: &str, request_timeout: Duration) -> Result<Self, FetchError> {
        if is_web_host(host) {
            Ok(HostFetcher::Http(HttpFetcher::with_timeout(request_timeout)?))
        } else {
            Ok(HostFetcher::File(FileFetcher::new()))
        }
    }
}

#[async_trait(?Send)]
impl Fetcher for HostFetcher {
    type Document = HtmlDocument;

    async fn open(&self, host: &str, path: &str) -> Result<HtmlDocument, FetchError> {
        match self {
            HostFetcher::Http(fetcher) => fetcher.open(host, path).await,
            HostFetcher::File(fetcher) => fetcher.open(host, path).await,
        }
    }
}

fn is_web_host(host: &str) -> bool {
    host.starts_with("http://") || host.starts_with("https://")
}
