// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG, written to stderr)
// 2. Parse command-line arguments using clap
// 3. Build a crawler for the host (HTTP or local files)
// 4. Crawl, then print the results as a table or JSON
// 5. Exit with proper code (0 = all pages fetched, 1 = some failed, 2 = error)
// =============================================================================

// The crawler itself lives in the library (src/lib.rs); this binary only
// parses arguments, runs it and prints what it found.
mod cli; // src/cli.rs - command-line parsing

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::future::Future;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_crawler::{CrawlResult, Crawler, HostFetcher, PageEvent};
use cli::{Cli, Commands, TargetArgs};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Log lines go to stderr so `--json` output on stdout stays parseable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_crawler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Returns:
//   Ok(0) = every page fetched
//   Ok(1) = at least one page failed to fetch
//   Err = the crawl could not run or was aborted
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(target) => handle_crawl(&target).await,
        Commands::Paths(target) => handle_paths(&target).await,
    }
}

// A page that could not be fetched, kept for the summary
struct Failure {
    path: String,
    message: String,
}

fn build_crawler(target: &TargetArgs) -> Result<Crawler<HostFetcher>> {
    let fetcher = HostFetcher::for_host(&target.host, Duration::from_secs(target.request_timeout))
        .context("Could not set up fetcher")?;
    Ok(Crawler::new(fetcher, &target.host))
}

// Keeps the failures reported by the crawler's progress hook
fn record_failures<D>(failures: &mut Vec<Failure>) -> impl FnMut(PageEvent<'_, D>) + '_
where
    D: 'static,
{
    move |event| {
        if let PageEvent::Failed { path, error } = event {
            failures.push(Failure {
                path: path.to_string(),
                message: error.to_string(),
            });
        }
    }
}

// Runs `work`, giving up after `timeout` seconds when one is set
async fn with_deadline<T>(timeout: Option<u64>, work: impl Future<Output = T>) -> Result<T> {
    match timeout {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), work)
            .await
            .map_err(|_| anyhow!("Crawl did not finish within {} second(s)", secs)),
        None => Ok(work.await),
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(target: &TargetArgs) -> Result<i32> {
    let crawler = build_crawler(target)?;

    if !target.json {
        println!("🔍 Crawling {} from {}", crawler.host(), target.root_path);
    }

    let mut failures = Vec::new();
    let result = with_deadline(
        target.timeout,
        crawler.crawl_with_progress(&target.root_path, record_failures(&mut failures)),
    )
    .await??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_assets_table(&result);
        print_summary(result.len(), Some(result.asset_count()), &failures);
    }

    Ok(exit_code(&failures))
}

// Handles the 'paths' subcommand
async fn handle_paths(target: &TargetArgs) -> Result<i32> {
    let crawler = build_crawler(target)?;

    if !target.json {
        println!("🔍 Discovering paths on {} from {}", crawler.host(), target.root_path);
    }

    let mut failures = Vec::new();
    let paths = with_deadline(
        target.timeout,
        crawler.find_local_paths(&target.root_path, record_failures(&mut failures)),
    )
    .await??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        println!();
        for path in &paths {
            println!("   {}", path);
        }
        println!();
        print_summary(paths.len() - failures.len(), None, &failures);
    }

    Ok(exit_code(&failures))
}

fn exit_code(failures: &[Failure]) -> i32 {
    if failures.is_empty() {
        0
    } else {
        1
    }
}

// Prints one row per asset; pages without assets get a "-" row
fn print_assets_table(result: &CrawlResult) {
    println!();
    println!("{:<50} {:<50}", "PAGE", "ASSET");
    println!("{}", "=".repeat(101));

    for (path, assets) in result.iter() {
        if assets.is_empty() {
            println!("{:<50} {:<50}", truncate(path, 50), "-");
        }
        for asset in assets {
            println!("{:<50} {:<50}", truncate(path, 50), asset);
        }
    }

    println!();
}

fn print_summary(pages: usize, assets: Option<usize>, failures: &[Failure]) {
    println!("📊 Summary:");
    println!("   📄 Pages: {}", pages);
    if let Some(assets) = assets {
        println!("   🖼️  Assets: {}", assets);
    }
    println!("   ❌ Failed: {}", failures.len());

    for failure in failures {
        println!("      {} ({})", failure.path, failure.message);
    }
}

// Truncates by characters, not bytes, so multi-byte paths can't panic
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
