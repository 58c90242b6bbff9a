// src/fetch/file.rs
// =============================================================================
// Reads pages from the local filesystem.
//
// The "host" is a directory such as "./public" and the path is appended to it
// verbatim: ("./public", "/docs/index.html") reads ./public/docs/index.html.
// A leading "file://" on the host is accepted and dropped.
//
// A path like "/docs/" names a directory, which cannot be read as a page, so
// it fails like any other missing file.
// =============================================================================

use async_trait::async_trait;

use super::Fetcher;
use crate::document::HtmlDocument;
use crate::error::FetchError;

#[derive(Debug, Default)]
pub struct FileFetcher;

impl FileFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Fetcher for FileFetcher {
    type Document = HtmlDocument;

    async fn open(&self, host: &str, path: &str) -> Result<HtmlDocument, FetchError> {
        let host = host.strip_prefix("file://").unwrap_or(host);
        let location = format!("{}{}", host, path);

        // read_to_string also rejects files that are not valid UTF-8
        let body = tokio::fs::read_to_string(&location)
            .await
            .map_err(|source| FetchError::Io { path: location, source })?;

        Ok(HtmlDocument::parse(&body))
    }
}
