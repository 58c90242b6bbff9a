// src/document/mod.rs
// =============================================================================
// This module describes what the crawler needs from a parsed page.
//
// The crawler never touches HTML directly. It only asks two questions:
// - "give me every element with this tag name, in document order"
// - "what is the value of this attribute on that element?"
//
// Keeping those questions behind traits means the crawl loop can be tested
// against an in-memory fake page, with no HTML parser and no network.
//
// Submodules:
// - html: the real implementation, built on the `scraper` crate
//
// Rust concepts:
// - Traits: Shared behaviour that different types can implement
// - Generic associated types: `Element<'a>` borrows from the document
// =============================================================================

mod html;

pub use html::HtmlDocument;

use crate::error::ExtractionError;

/// A parsed page that can be queried by tag name.
pub trait Document {
    /// An element borrowed from this document.
    type Element<'a>: Element
    where
        Self: 'a;

    /// Returns all elements named `tag`, in document order.
    fn find_elements(&self, tag: &str) -> Result<Vec<Self::Element<'_>>, ExtractionError>;
}

/// A single element of a [`Document`].
pub trait Element {
    /// Returns the value of attribute `name`, or `None` when it is absent.
    fn attribute(&self, name: &str) -> Option<&str>;
}
