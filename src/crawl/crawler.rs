// src/crawl/crawler.rs
// =============================================================================
// This module drives a crawl from a root path to every page reachable
// through root-relative links, one page at a time.
//
// How it works:
// 1. Put the root path in the queue
// 2. Take the oldest unvisited path and fetch it
// 3. Queue every root-relative link on the page (known paths are ignored)
// 4. Mark the path visited and record the page's local assets
// 5. Repeat until no unvisited path is left
//
// A page that fails to fetch is logged, reported to the progress hook, and
// marked visited as well. It is never retried, and it gets no entry in the
// result.
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher (HTTP, files, test fakes)
// - Closures: The progress hook is any FnMut the caller passes in
// =============================================================================

use tracing::{debug, info, warn};

use super::queue::PathQueue;
use super::result::CrawlResult;
use crate::error::{CrawlError, FetchError};
use crate::extract::{extract_assets, extract_links};
use crate::fetch::Fetcher;

/// Root path used when the caller does not name one.
pub const DEFAULT_ROOT_PATH: &str = "/";

/// What happened to one path during a crawl.
#[derive(Debug)]
pub enum PageEvent<'a, D> {
    Fetched { path: &'a str, document: &'a D },
    Failed { path: &'a str, error: &'a FetchError },
}

/// Crawls one host through a [`Fetcher`].
pub struct Crawler<F> {
    fetcher: F,
    host: String,
}

impl<F: Fetcher> Crawler<F> {
    // Trailing slashes are dropped from the host so that host + "/path"
    // never contains "//"
    pub fn new(fetcher: F, host: &str) -> Self {
        Self {
            fetcher,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Crawls from `root_path` and returns the local assets of every page
    /// that was fetched.
    pub async fn crawl(&self, root_path: &str) -> Result<CrawlResult, CrawlError> {
        self.crawl_with_progress(root_path, |_| {}).await
    }

    /// Like [`Crawler::crawl`], calling `progress` once per processed path.
    pub async fn crawl_with_progress<P>(
        &self,
        root_path: &str,
        mut progress: P,
    ) -> Result<CrawlResult, CrawlError>
    where
        P: FnMut(PageEvent<'_, F::Document>),
    {
        let mut result = CrawlResult::new();

        self.walk(root_path, |event| {
            if let PageEvent::Fetched { path, document } = event {
                progress(PageEvent::Fetched { path, document });

                let assets = extract_assets(document)?;
                info!(path = %path, assets = assets.len(), "retrieved assets");
                result.insert(path, assets);
            } else {
                progress(event);
            }
            Ok(())
        })
        .await?;

        Ok(result)
    }

    /// Runs the traversal alone and returns every path it reached, in
    /// discovery order. Paths that failed to fetch are included.
    pub async fn find_local_paths<P>(
        &self,
        root_path: &str,
        mut progress: P,
    ) -> Result<Vec<String>, CrawlError>
    where
        P: FnMut(PageEvent<'_, F::Document>),
    {
        let queue = self
            .walk(root_path, |event| {
                progress(event);
                Ok(())
            })
            .await?;

        Ok(queue.into_paths())
    }

    async fn walk<H>(&self, root_path: &str, mut handle: H) -> Result<PathQueue, CrawlError>
    where
        H: FnMut(PageEvent<'_, F::Document>) -> Result<(), CrawlError>,
    {
        let mut queue = PathQueue::new();
        queue.discover(root_path);

        info!(host = %self.host, root = %root_path, "starting crawl");

        while let Some(path) = queue.next_unvisited().map(str::to_owned) {
            match self.fetcher.open(&self.host, &path).await {
                Ok(document) => {
                    let links = extract_links(&document)?;
                    let before = queue.len();
                    for link in links {
                        queue.discover(link);
                    }
                    debug!(path = %path, new_paths = queue.len() - before, "discovered links");

                    queue.mark_visited(&path);
                    handle(PageEvent::Fetched { path: &path, document: &document })?;
                }
                Err(error) => {
                    warn!(path = %path, error = %error, "failed to fetch page");

                    // Consumed even on failure, otherwise it would be handed
                    // out again forever
                    queue.mark_visited(&path);
                    handle(PageEvent::Failed { path: &path, error: &error })?;
                }
            }
        }

        info!(paths = queue.len(), "crawl finished");
        Ok(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fake::{FakeDocument, FakeNode};
    use crate::document::Document;
    use crate::error::ExtractionError;
    use crate::fetch::{FileFetcher, HttpFetcher};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::time::Duration;

    // In-memory site: path -> page. Unknown paths answer 404.
    // Every open() call is logged as host + path.
    #[derive(Default)]
    struct FakeSite {
        pages: HashMap<String, FakeDocument>,
        fetched: Rc<RefCell<Vec<String>>>,
    }

    impl FakeSite {
        fn page(mut self, path: &str, document: FakeDocument) -> Self {
            self.pages.insert(path.to_string(), document);
            self
        }

        fn fetch_log(&self) -> Rc<RefCell<Vec<String>>> {
            Rc::clone(&self.fetched)
        }
    }

    #[async_trait(?Send)]
    impl Fetcher for FakeSite {
        type Document = FakeDocument;

        async fn open(&self, host: &str, path: &str) -> Result<FakeDocument, FetchError> {
            let url = format!("{}{}", host, path);
            self.fetched.borrow_mut().push(url.clone());
            self.pages
                .get(path)
                .cloned()
                .ok_or(FetchError::Status { url, status: 404 })
        }
    }

    // Collects the paths reported by the progress hook
    fn visited_paths(events: &mut Vec<String>) -> impl FnMut(PageEvent<'_, FakeDocument>) + '_ {
        move |event| {
            if let PageEvent::Fetched { path, .. } = event {
                events.push(path.to_string());
            }
        }
    }

    #[tokio::test]
    async fn test_simple_graph() {
        let site = FakeSite::default()
            .page("/a.html", FakeDocument::new().link("/b.html"))
            .page("/b.html", FakeDocument::new());
        let log = site.fetch_log();
        let crawler = Crawler::new(site, "http://example.com");

        let mut visited = Vec::new();
        let result = crawler
            .crawl_with_progress("/a.html", visited_paths(&mut visited))
            .await
            .unwrap();

        assert_eq!(visited, vec!["/a.html", "/b.html"]);
        assert_eq!(result.paths().collect::<Vec<_>>(), vec!["/a.html", "/b.html"]);
        assert_eq!(
            *log.borrow(),
            vec!["http://example.com/a.html", "http://example.com/b.html"]
        );
    }

    #[tokio::test]
    async fn test_cycle_is_visited_once() {
        let site = FakeSite::default()
            .page("/a.html", FakeDocument::new().link("/b.html").link("/c.html"))
            .page("/b.html", FakeDocument::new().link("/a.html").link("/c.html"))
            .page("/c.html", FakeDocument::new());
        let log = site.fetch_log();
        let crawler = Crawler::new(site, "http://example.com");

        let mut visited = Vec::new();
        crawler
            .crawl_with_progress("/a.html", visited_paths(&mut visited))
            .await
            .unwrap();

        assert_eq!(visited, vec!["/a.html", "/b.html", "/c.html"]);
        assert_eq!(log.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_order_follows_discovery_not_depth() {
        // /b.html is linked from the root after /a.html, so it is visited
        // before /a.html's own child /a/deep.html
        let site = FakeSite::default()
            .page("/", FakeDocument::new().link("/a.html").link("/b.html"))
            .page("/a.html", FakeDocument::new().link("/a/deep.html"))
            .page("/b.html", FakeDocument::new())
            .page("/a/deep.html", FakeDocument::new());
        let crawler = Crawler::new(site, "http://example.com");

        let paths = crawler.find_local_paths(DEFAULT_ROOT_PATH, |_| {}).await.unwrap();
        assert_eq!(paths, vec!["/", "/a.html", "/b.html", "/a/deep.html"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_does_not_stop_the_crawl() {
        let site = FakeSite::default()
            .page(
                "/a.html",
                FakeDocument::new().link("/missing.html").link("/b.html"),
            )
            .page("/b.html", FakeDocument::new());
        let log = site.fetch_log();
        let crawler = Crawler::new(site, "http://example.com");

        let mut visited = Vec::new();
        let mut failed = Vec::new();
        let result = crawler
            .crawl_with_progress("/a.html", |event| match event {
                PageEvent::Fetched { path, .. } => visited.push(path.to_string()),
                PageEvent::Failed { path, error } => {
                    failed.push((path.to_string(), error.to_string()))
                }
            })
            .await
            .unwrap();

        assert_eq!(visited, vec!["/a.html", "/b.html"]);
        assert_eq!(
            failed,
            vec![(
                "/missing.html".to_string(),
                "http://example.com/missing.html returned HTTP 404".to_string()
            )]
        );
        assert!(result.assets("/missing.html").is_none());
        assert_eq!(result.len(), 2);
        // Fetched once, never retried
        assert_eq!(log.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_paths_are_still_reached() {
        let site = FakeSite::default().page(
            "/a.html",
            FakeDocument::new().link("/missing.html").link("/b.html"),
        );
        let crawler = Crawler::new(site, "http://example.com");

        let paths = crawler.find_local_paths("/a.html", |_| {}).await.unwrap();
        assert_eq!(paths, vec!["/a.html", "/missing.html", "/b.html"]);
    }

    #[tokio::test]
    async fn test_missing_root_returns_empty_result() {
        let crawler = Crawler::new(FakeSite::default(), "http://example.com");
        let result = crawler.crawl(DEFAULT_ROOT_PATH).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_assets_are_recorded_per_page() {
        let site = FakeSite::default()
            .page(
                "/",
                FakeDocument::new()
                    .with("script", &[("src", "/app.js")])
                    .link("/about.html")
                    .with("img", &[("src", "//cdn.example.com/logo.png")])
                    .with("img", &[("src", "/logo.png")]),
            )
            .page("/about.html", FakeDocument::new());
        let crawler = Crawler::new(site, "http://example.com");

        let result = crawler.crawl("/").await.unwrap();
        assert_eq!(
            result.assets("/"),
            Some(&["/logo.png".to_string(), "/app.js".to_string()][..])
        );
        assert_eq!(result.assets("/about.html"), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_host_trailing_slashes_are_stripped() {
        let site = FakeSite::default().page("/", FakeDocument::new());
        let log = site.fetch_log();
        let crawler = Crawler::new(site, "http://example.com///");

        assert_eq!(crawler.host(), "http://example.com");
        crawler.crawl("/").await.unwrap();
        assert_eq!(*log.borrow(), vec!["http://example.com/"]);
    }

    #[tokio::test]
    async fn test_paths_are_not_normalized() {
        let site = FakeSite::default()
            .page(
                "/",
                FakeDocument::new()
                    .link("/docs")
                    .link("/docs/")
                    .link("/docs?page=2")
                    .link("//cdn.example.com/x.html"),
            )
            .page("/docs", FakeDocument::new())
            .page("/docs/", FakeDocument::new())
            .page("/docs?page=2", FakeDocument::new());
        let crawler = Crawler::new(site, "http://example.com");

        let result = crawler.crawl("/").await.unwrap();
        assert_eq!(
            result.paths().collect::<Vec<_>>(),
            vec!["/", "/docs", "/docs/", "/docs?page=2"]
        );
    }

    #[tokio::test]
    async fn test_fetch_count_equals_distinct_paths() {
        // Every page links to every other page, plus itself
        let paths: Vec<String> = (0..25).map(|i| format!("/page{}.html", i)).collect();
        let mut site = FakeSite::default();
        for path in &paths {
            let page = paths
                .iter()
                .fold(FakeDocument::new(), |page, target| page.link(target));
            site = site.page(path, page);
        }
        let log = site.fetch_log();
        let crawler = Crawler::new(site, "http://example.com");

        let result = crawler.crawl("/page0.html").await.unwrap();
        assert_eq!(result.len(), 25);
        assert_eq!(log.borrow().len(), 25);
    }

    // A document that cannot be queried at all
    struct BrokenDocument;

    impl Document for BrokenDocument {
        type Element<'a> = &'a FakeNode;

        fn find_elements(&self, tag: &str) -> Result<Vec<&FakeNode>, ExtractionError> {
            Err(ExtractionError::InvalidTag {
                tag: tag.to_string(),
                reason: "document is broken".to_string(),
            })
        }
    }

    struct BrokenSite;

    #[async_trait(?Send)]
    impl Fetcher for BrokenSite {
        type Document = BrokenDocument;

        async fn open(&self, _host: &str, _path: &str) -> Result<BrokenDocument, FetchError> {
            Ok(BrokenDocument)
        }
    }

    #[tokio::test]
    async fn test_extraction_errors_propagate() {
        let crawler = Crawler::new(BrokenSite, "http://example.com");
        let result = crawler.crawl("/").await;
        assert!(matches!(result, Err(CrawlError::Extraction(_))));
    }

    fn fixtures_host() -> String {
        // Trailing slash on purpose, it must be stripped
        format!("{}/fixtures/", env!("CARGO_MANIFEST_DIR"))
    }

    #[tokio::test]
    async fn test_fixture_simple_crawl() {
        let crawler = Crawler::new(FileFetcher::new(), &fixtures_host());
        let paths = crawler.find_local_paths("/simple.html", |_| {}).await.unwrap();
        assert_eq!(paths, vec!["/simple.html", "/nolinks.html"]);
    }

    #[tokio::test]
    async fn test_directory_host_needs_a_file_root() {
        let crawler = Crawler::new(FileFetcher::new(), &fixtures_host());

        // "/" is the fixtures directory itself
        let mut failed = Vec::new();
        let result = crawler
            .crawl_with_progress(DEFAULT_ROOT_PATH, |event| {
                if let PageEvent::Failed { path, error } = event {
                    failed.push(path.to_string());
                    assert!(matches!(error, FetchError::Io { .. }));
                }
            })
            .await
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(failed, vec!["/"]);

        let result = crawler.crawl("/simple.html").await.unwrap();
        assert_eq!(result.paths().collect::<Vec<_>>(), vec!["/simple.html", "/nolinks.html"]);
    }

    #[tokio::test]
    async fn test_fixture_complex_crawl_skips_visited_links() {
        let crawler = Crawler::new(FileFetcher::new(), &fixtures_host());
        let paths = crawler.find_local_paths("/complex.html", |_| {}).await.unwrap();
        assert_eq!(paths, vec!["/complex.html", "/other.html", "/nolinks.html"]);
    }

    #[tokio::test]
    async fn test_http_crawl() {
        use wiremock::{
            matchers::{method, path},
            Mock, MockServer, ResponseTemplate,
        };

        let mock_server = MockServer::start().await;

        let pages = [
            (
                "/",
                r#"<html><head><link rel="stylesheet" href="/site.css"></head>
                   <body><a href="/about.html">About</a><a href="/gone.html">Gone</a></body></html>"#,
            ),
            (
                "/about.html",
                r#"<html><body><img src="/team.jpg"><a href="/">Home</a></body></html>"#,
            ),
        ];
        for (page, body) in pages {
            Mock::given(method("GET"))
                .and(path(page))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("content-type", "text/html")
                        .set_body_string(body),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/gone.html"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let crawler = Crawler::new(fetcher, &mock_server.uri());
        let result = crawler.crawl("/").await.unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "/": ["/site.css"],
                "/about.html": ["/team.jpg"],
            })
        );
    }
}
