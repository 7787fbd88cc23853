//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the configured base path.
///
/// An explicitly empty value is honored and produces a root site,
/// e.g. for deployments behind a custom domain.
pub const BASE_PATH_ENV: &str = "BASE_PATH";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    /// Base path the site is served under (overridden by BASE_PATH)
    pub root: String,

    // Directory
    pub public_dir: String,
    pub static_dir: String,

    /// Document served for unmatched routes
    pub fallback: String,

    /// Pages to prerender, in navigation order
    pub pages: Vec<PageConfig>,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Internet Pavilion".to_string(),
            description: String::new(),
            author: "Internet Pavilion PH".to_string(),
            language: "en".to_string(),

            url: "https://internet-pavilion-ph.github.io".to_string(),
            root: "/homepage".to_string(),

            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            fallback: "404.html".to_string(),

            pages: vec![
                PageConfig {
                    name: "info".to_string(),
                    title: "Info".to_string(),
                    source:
                        "https://raw.githubusercontent.com/Internet-Pavilion-PH/notes/main/low_bandwidth_dreams.md"
                            .to_string(),
                },
                PageConfig {
                    name: "participants".to_string(),
                    title: "Participants".to_string(),
                    source:
                        "https://raw.githubusercontent.com/Internet-Pavilion-PH/notes/main/cyber_purok_bio.md"
                            .to_string(),
                },
            ],

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Effective base path for the build.
    ///
    /// Dev mode always builds a root site; otherwise BASE_PATH wins over
    /// the configured root.
    pub fn base_path(&self, dev: bool) -> String {
        if dev {
            return String::new();
        }
        resolve_base(std::env::var(BASE_PATH_ENV).ok().as_deref(), &self.root)
    }
}

/// Normalize a base path: leading slash, no trailing slash, empty stays empty.
fn resolve_base(env_value: Option<&str>, root: &str) -> String {
    let raw = env_value.unwrap_or(root);
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// A single prerendered page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// URL path segment the page is published under
    pub name: String,
    /// Title shown in navigation and the document head
    pub title: String,
    /// Remote Markdown document the page is rendered from
    pub source: String,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_number: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_number: false,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}
