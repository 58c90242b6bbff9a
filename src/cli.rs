// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands share the same target arguments:
// - crawl: list the local assets of every reachable page
// - paths: only list the reachable pages
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs
// - #[derive(Args)]: one argument struct shared by both subcommands
// =============================================================================

use clap::{Args, Parser, Subcommand};

use asset_crawler::DEFAULT_ROOT_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "asset-crawler",
    version,
    about = "Crawl a single host and list the local static assets of every page",
    long_about = "asset-crawler starts from a root path, follows every root-relative link on the \
                  same host, and reports the local images, stylesheets and scripts each page uses. \
                  The host can be a base URL or a directory holding a static site build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a host and report the local assets of every page
    ///
    /// Example: asset-crawler crawl https://example.com --root-path /index.html
    Crawl(TargetArgs),

    /// Crawl a host and only report which paths were reached
    ///
    /// Example: asset-crawler paths ./public --root-path /index.html --json
    Paths(TargetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Base URL (https://example.com) or local directory (./public) to crawl
    ///
    /// Trailing slashes are ignored
    pub host: String,

    /// Path the crawl starts from; must begin with "/"
    ///
    /// A directory host needs a file here (e.g. /index.html): "/" names the
    /// directory itself, which cannot be read as a page
    #[arg(long, default_value = DEFAULT_ROOT_PATH, value_parser = parse_root_path)]
    pub root_path: String,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Give up on the whole crawl after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub request_timeout: u64,
}

fn parse_root_path(value: &str) -> Result<String, String> {
    if value.starts_with('/') {
        Ok(value.to_string())
    } else {
        Err(format!("root path must start with '/', got '{}'", value))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a tuple variant like Crawl(TargetArgs)?
//    - Both subcommands take exactly the same arguments
//    - clap reads the fields of TargetArgs as that subcommand's arguments
//
// 2. What is value_parser?
//    - A function clap runs on the raw string before storing it
//    - Returning Err makes clap print the message and exit with usage help
//
// 3. Why Option<u64> for --timeout?
//    - No flag means no deadline at all
//    - default_value_t would force a deadline on every run
// -----------------------------------------------------------------------------
