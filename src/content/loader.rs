//! Content loader - fetches and renders the configured pages

use anyhow::Result;

use super::{Fetcher, MarkdownRenderer, Page};
use crate::config::PageConfig;
use crate::helpers::url_for;
use crate::Pavilion;

/// Loads pages from their remote Markdown sources
pub struct ContentLoader<'a> {
    pavilion: &'a Pavilion,
    base_path: String,
    fetcher: Fetcher,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader for a build with the given base path
    pub fn new(pavilion: &'a Pavilion, base_path: &str) -> Self {
        let renderer = MarkdownRenderer::from_config(&pavilion.config.highlight);
        Self {
            pavilion,
            base_path: base_path.to_string(),
            fetcher: Fetcher::new(),
            renderer,
        }
    }

    /// Load all configured pages in order.
    ///
    /// Pages are independent of each other; any single failure aborts
    /// the build.
    pub async fn load_pages(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();

        for page_config in &self.pavilion.config.pages {
            let page = self.load_page(page_config).await?;
            pages.push(page);
        }

        tracing::info!("Loaded {} pages", pages.len());

        Ok(pages)
    }

    /// Fetch one page's Markdown source and render it to HTML
    pub async fn load_page(&self, config: &PageConfig) -> Result<Page> {
        tracing::debug!("Fetching {:?} from {}", config.name, config.source);

        let raw = self.fetcher.fetch_markdown(&config.source).await?;
        let content = self.renderer.render(&raw);

        let path = url_for(&self.base_path, &format!("{}/", config.name));
        let permalink = format!(
            "{}{}",
            self.pavilion.config.url.trim_end_matches('/'),
            path
        );

        let mut page = Page::new(
            config.name.clone(),
            config.title.clone(),
            config.source.clone(),
        );
        page.raw = raw;
        page.content = content;
        page.path = path;
        page.permalink = permalink;

        Ok(page)
    }
}
