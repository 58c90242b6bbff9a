// src/document/html.rs
// =============================================================================
// The real Document implementation.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever never rejects input: broken markup is repaired the same way a
// browser would repair it, so parsing itself cannot fail.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use super::{Document, Element};
use crate::error::ExtractionError;

/// An HTML page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl Document for HtmlDocument {
    type Element<'a> = ElementRef<'a>;

    fn find_elements(&self, tag: &str) -> Result<Vec<ElementRef<'_>>, ExtractionError> {
        // A bare tag name is a valid CSS selector ("img", "link", ...)
        let selector = Selector::parse(tag).map_err(|e| ExtractionError::InvalidTag {
            tag: tag.to_string(),
            reason: format!("{:?}", e),
        })?;

        Ok(self.html.select(&selector).collect())
    }
}

impl Element for ElementRef<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        // .value() gets the underlying Element, .attr() reads one attribute
        self.value().attr(name)
    }
}
