// src/extract/mod.rs
// =============================================================================
// This module pulls URLs out of a parsed page.
//
// Submodules:
// - links: <a href> targets the crawler should follow
// - assets: img / link / script URLs worth reporting
//
// The two use different rules on purpose:
// - a link is followed when it starts with "/" (so "//cdn.host/x" passes too)
// - an asset is kept only when "/" is followed by something other than "/"
//
// Both are pure reads over a Document; neither deduplicates.
// =============================================================================

mod assets;
mod links;

pub use assets::{extract_assets, is_local_asset, AssetRule, ASSET_RULES};
pub use links::{extract_links, is_root_relative};
