// src/lib.rs
// =============================================================================
// The crawler core as a library. The asset-crawler binary (src/main.rs) is
// one consumer of it; anything else that wants a path -> assets map for a
// host can use it directly:
//
//   let fetcher = HostFetcher::for_host("https://example.com", timeout)?;
//   let result = Crawler::new(fetcher, "https://example.com").crawl("/").await?;
//
// Modules:
// - crawl: the crawl loop, its queue and its result
// - document: what a parsed page looks like
// - extract: link and asset extraction
// - fetch: HTTP and file fetchers
// - error: typed errors
// =============================================================================

pub mod crawl;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;

pub use crawl::{CrawlResult, Crawler, PageEvent, DEFAULT_ROOT_PATH};
pub use error::{CrawlError, ExtractionError, FetchError};
pub use fetch::{Fetcher, HostFetcher};
