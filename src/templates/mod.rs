//! Built-in page templates using the Tera template engine
//!
//! The site ships a single embedded layout; there is no on-disk theme
//! directory to resolve.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with embedded templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // The page body is already HTML produced by the Markdown
        // renderer, so autoescaping must stay off
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("builtin/layout.html")),
            ("page.html", include_str!("builtin/page.html")),
            ("404.html", include_str!("builtin/404.html")),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide data passed to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// Effective base path, without trailing slash
    pub base: String,
}

/// A navigation entry
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Page;

    fn test_context() -> Context {
        let site = SiteData {
            title: "Test Site".to_string(),
            description: String::new(),
            author: "Tester".to_string(),
            language: "en".to_string(),
            base: String::new(),
        };
        let nav = vec![NavItem {
            title: "Info".to_string(),
            path: "/info/".to_string(),
        }];

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("nav", &nav);
        context
    }

    #[test]
    fn test_render_page() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut page = Page::new(
            "info".to_string(),
            "Info".to_string(),
            "https://example.com/info.md".to_string(),
        );
        page.content = "<h1>Hello</h1>".to_string();

        let mut context = test_context();
        context.insert("page", &page);

        let html = renderer.render("page.html", &context).unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<title>Info - Test Site</title>"));
        assert!(html.contains(r#"<a href="/info/">Info</a>"#));
    }

    #[test]
    fn test_render_fallback() {
        let renderer = TemplateRenderer::new().unwrap();
        let context = test_context();

        let html = renderer.render("404.html", &context).unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"<a href="/">"#));
    }

    #[test]
    fn test_strip_html_filter() {
        let value = tera::Value::String("<p>plain <em>text</em></p>".to_string());
        let result = strip_html_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(result, tera::Value::String("plain text".to_string()));
    }
}
