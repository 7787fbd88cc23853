//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Pavilion;

/// Clean the public directory
pub fn run(pavilion: &Pavilion) -> Result<()> {
    if pavilion.public_dir.exists() {
        fs::remove_dir_all(&pavilion.public_dir)?;
        tracing::info!("Deleted: {:?}", pavilion.public_dir);
    }

    Ok(())
}
