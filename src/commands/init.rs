//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_content = r#"# Site
title: Internet Pavilion
description: ''
author: Internet Pavilion PH
language: en

# URL
url: https://internet-pavilion-ph.github.io
# Base path the site is served under; the BASE_PATH environment
# variable overrides this (an empty BASE_PATH builds a root site)
root: /homepage

# Directory
public_dir: public
static_dir: static

# Document served for unmatched routes
fallback: 404.html

# Pages to prerender, in navigation order
pages:
  - name: info
    title: Info
    source: https://raw.githubusercontent.com/Internet-Pavilion-PH/notes/main/low_bandwidth_dreams.md
  - name: participants
    title: Participants
    source: https://raw.githubusercontent.com/Internet-Pavilion-PH/notes/main/cyber_purok_bio.md

# Code highlighting
highlight:
  enable: true
  line_number: false
  theme: base16-ocean.dark
"#;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    Ok(())
}
