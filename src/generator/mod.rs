//! Generator module - writes the static site from loaded pages

use anyhow::Result;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::Page;
use crate::templates::{NavItem, SiteData, TemplateRenderer};
use crate::Pavilion;

/// Static site generator using the embedded templates
pub struct Generator {
    pavilion: Pavilion,
    renderer: TemplateRenderer,
    base_path: String,
}

impl Generator {
    /// Create a new generator for a build with the given base path
    pub fn new(pavilion: &Pavilion, base_path: &str) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            pavilion: pavilion.clone(),
            renderer,
            base_path: base_path.to_string(),
        })
    }

    /// Generate the entire site
    pub fn generate(&self, pages: &[Page]) -> Result<()> {
        fs::create_dir_all(&self.pavilion.public_dir)?;

        self.copy_static_assets()?;

        let site_data = self.build_site_data();
        let nav = build_nav(pages);

        for page in pages {
            self.generate_page(page, &site_data, &nav)?;
        }

        // The first configured page doubles as the site index so the
        // root URL resolves without a redirect
        if let Some(first) = pages.first() {
            let html = self.render_page(first, &site_data, &nav)?;
            fs::write(self.pavilion.public_dir.join("index.html"), html)?;
        }

        self.generate_fallback(&site_data, &nav)?;

        Ok(())
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        let config = &self.pavilion.config;
        SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            base: self.base_path.clone(),
        }
    }

    /// Render a single page to HTML
    fn render_page(&self, page: &Page, site: &SiteData, nav: &[NavItem]) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("nav", nav);
        context.insert("page", page);

        self.renderer.render("page.html", &context)
    }

    /// Write a page to <public>/<name>/index.html
    fn generate_page(&self, page: &Page, site: &SiteData, nav: &[NavItem]) -> Result<()> {
        let html = self.render_page(page, site, nav)?;

        let page_dir = self.pavilion.public_dir.join(&page.name);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), html)?;

        tracing::debug!("Generated {}", page.path);

        Ok(())
    }

    /// Write the fallback document for unmatched routes
    fn generate_fallback(&self, site: &SiteData, nav: &[NavItem]) -> Result<()> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("nav", nav);

        let html = self.renderer.render("404.html", &context)?;
        fs::write(
            self.pavilion.public_dir.join(&self.pavilion.config.fallback),
            html,
        )?;

        Ok(())
    }

    /// Copy the static asset directory into the output, if present
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = self.pavilion.base_dir.join(&self.pavilion.config.static_dir);
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&static_dir)?;
            let target = self.pavilion.public_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
        }

        Ok(())
    }
}

/// Navigation entries for the configured pages, in order
fn build_nav(pages: &[Page]) -> Vec<NavItem> {
    pages
        .iter()
        .map(|p| NavItem {
            title: p.title.clone(),
            path: p.path.clone(),
        })
        .collect()
}
