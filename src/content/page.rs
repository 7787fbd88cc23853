//! Page model

use serde::Serialize;

/// A prerendered page
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// URL path segment the page is published under
    pub name: String,

    /// Page title
    pub title: String,

    /// Remote Markdown source URL
    pub source: String,

    /// Raw markdown content
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// URL path (with base path)
    pub path: String,

    /// Full permalink URL
    pub permalink: String,
}

impl Page {
    /// Create a new page with minimal required fields
    pub fn new(name: String, title: String, source: String) -> Self {
        Self {
            name,
            title,
            source,
            raw: String::new(),
            content: String::new(),
            path: String::new(),
            permalink: String::new(),
        }
    }
}
