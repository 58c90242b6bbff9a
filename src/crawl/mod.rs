// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a single host.
//
// Features:
// - Starts from a root path and follows root-relative links only
// - Visits every discovered path exactly once, in discovery order
// - Records the local assets (img / link / script) of every page
// - Keeps going when a page fails to fetch
//
// Submodules:
// - queue: which paths were found and which were visited
// - crawler: the fetch / extract loop
// - result: the path -> assets map a crawl returns
// =============================================================================

mod crawler;
mod queue;
mod result;

pub use crawler::{Crawler, PageEvent, DEFAULT_ROOT_PATH};
pub use queue::{PathQueue, VisitState};
pub use result::CrawlResult;
