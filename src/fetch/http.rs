// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP/HTTPS.
//
// The URL is simply host + path. The path is whatever the page linked to, so
// query strings and fragments are sent as-is.
//
// Anything other than a 2xx response is a failure. reqwest follows redirects
// on its own (up to 5 here), so a 301 to a live page counts as success.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::Fetcher;
use crate::document::HtmlDocument;
use crate::error::FetchError;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("asset-crawler/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    // Fetches a URL and returns its body as text
    async fn fetch_page(&self, url: Url) -> Result<String, FetchError> {
        let display = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: display.clone(), source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: display,
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Request { url: display, source })
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    type Document = HtmlDocument;

    async fn open(&self, host: &str, path: &str) -> Result<HtmlDocument, FetchError> {
        let target = format!("{}{}", host, path);
        let url = Url::parse(&target).map_err(|e| FetchError::InvalidUrl {
            url: target.clone(),
            reason: e.to_string(),
        })?;

        let body = self.fetch_page(url).await?;
        Ok(HtmlDocument::parse(&body))
    }
}
