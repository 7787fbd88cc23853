//! List configured pages

use anyhow::Result;

use crate::Pavilion;

/// Print the configured pages and their content sources
pub fn run(pavilion: &Pavilion) -> Result<()> {
    let pages = &pavilion.config.pages;

    println!("Pages ({}):", pages.len());
    for page in pages {
        println!("  {} - {} [{}]", page.name, page.title, page.source);
    }

    Ok(())
}
