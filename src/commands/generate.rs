//! Generate static files

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Pavilion;

/// Generate the static site with the deployment base path
pub async fn run(pavilion: &Pavilion) -> Result<()> {
    let base_path = pavilion.config.base_path(false);
    run_with_base(pavilion, &base_path).await
}

/// Generate with an explicit base path (the preview server passes "")
pub async fn run_with_base(pavilion: &Pavilion, base_path: &str) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(pavilion, base_path);
    let pages = loader.load_pages().await?;

    let generator = Generator::new(pavilion, base_path)?;
    generator.generate(&pages)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
