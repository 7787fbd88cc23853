//! End-to-end build tests against a local content server

use anyhow::Result;
use axum::{routing::get, Router};
use std::fs;
use std::path::Path;

use pavilion::commands::generate;
use pavilion::Pavilion;

/// Bind a throwaway content server on an ephemeral port
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Content server with the two fixture documents
async fn content_server() -> String {
    let app = Router::new()
        .route("/info.md", get(|| async { "# Hello\n\nWorld" }))
        .route(
            "/participants.md",
            get(|| async { "# People\n\n```js\nconst a=1;\n```" }),
        );
    serve(app).await
}

/// Write a site config whose pages point at the content server
fn write_config(dir: &Path, source_base: &str) -> Result<()> {
    let config = format!(
        r#"title: Test Pavilion
url: https://example.com
root: /homepage
pages:
  - name: info
    title: Info
    source: {base}/info.md
  - name: participants
    title: Participants
    source: {base}/participants.md
"#,
        base = source_base
    );
    fs::write(dir.join("_config.yml"), config)?;
    Ok(())
}

#[tokio::test]
async fn test_generate_site() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;
    pavilion.generate_dev().await?;

    let info = fs::read_to_string(dir.path().join("public/info/index.html"))?;
    assert!(info.contains("<h1>Hello</h1>"));
    assert!(info.contains("<p>World</p>"));
    assert!(info.find("<h1>Hello</h1>").unwrap() < info.find("<p>World</p>").unwrap());

    // Fenced code blocks come out wrapped in <pre><code>
    let participants = fs::read_to_string(dir.path().join("public/participants/index.html"))?;
    assert!(participants.contains("<pre><code"));
    assert!(participants.contains("const"));

    // The first configured page doubles as the site index
    let index = fs::read_to_string(dir.path().join("public/index.html"))?;
    assert!(index.contains("<h1>Hello</h1>"));

    // Fallback document for unmatched routes
    let fallback = fs::read_to_string(dir.path().join("public/404.html"))?;
    assert!(fallback.contains("Page not found"));

    Ok(())
}

#[tokio::test]
async fn test_generate_applies_base_path() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;
    generate::run_with_base(&pavilion, "/homepage").await?;

    let info = fs::read_to_string(dir.path().join("public/info/index.html"))?;
    assert!(info.contains(r#"<a href="/homepage/info/">Info</a>"#));
    assert!(info.contains(r#"<a href="/homepage/participants/">Participants</a>"#));
    assert!(info.contains(r#"<a href="/homepage/">"#));

    Ok(())
}

#[tokio::test]
async fn test_generate_dev_builds_root_site() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;
    pavilion.generate_dev().await?;

    let info = fs::read_to_string(dir.path().join("public/info/index.html"))?;
    assert!(info.contains(r#"<a href="/info/">Info</a>"#));
    assert!(!info.contains("/homepage/"));

    Ok(())
}

#[tokio::test]
async fn test_generate_empty_document() -> Result<()> {
    let app = Router::new().route("/empty.md", get(|| async { "" }));
    let source_base = serve(app).await;

    let dir = tempfile::tempdir()?;
    let config = format!(
        r#"title: Test Pavilion
pages:
  - name: empty
    title: Empty
    source: {base}/empty.md
"#,
        base = source_base
    );
    fs::write(dir.path().join("_config.yml"), config)?;

    let pavilion = Pavilion::new(dir.path())?;
    pavilion.generate_dev().await?;

    let html = fs::read_to_string(dir.path().join("public/empty/index.html"))?;
    assert!(html.contains("<article class=\"page\">\n\n</article>"));

    Ok(())
}

#[tokio::test]
async fn test_generate_fails_on_missing_source() -> Result<()> {
    // No routes: every fetch gets a 404
    let source_base = serve(Router::new()).await;

    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;
    let err = pavilion.generate_dev().await.unwrap_err();

    assert!(format!("{:#}", err).contains("failed to fetch markdown"));
    // The failed build publishes nothing
    assert!(!dir.path().join("public/info/index.html").exists());

    Ok(())
}

#[tokio::test]
async fn test_generate_is_deterministic() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;

    pavilion.generate_dev().await?;
    let first = fs::read_to_string(dir.path().join("public/info/index.html"))?;

    pavilion.generate_dev().await?;
    let second = fs::read_to_string(dir.path().join("public/info/index.html"))?;

    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_generate_copies_static_assets() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    fs::create_dir_all(dir.path().join("static/css"))?;
    fs::write(dir.path().join("static/css/site.css"), "body {}")?;

    let pavilion = Pavilion::new(dir.path())?;
    pavilion.generate_dev().await?;

    assert_eq!(
        fs::read_to_string(dir.path().join("public/css/site.css"))?,
        "body {}"
    );

    Ok(())
}

#[tokio::test]
async fn test_clean_removes_public_dir() -> Result<()> {
    let source_base = content_server().await;
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), &source_base)?;

    let pavilion = Pavilion::new(dir.path())?;
    pavilion.generate_dev().await?;
    assert!(dir.path().join("public").exists());

    pavilion.clean()?;
    assert!(!dir.path().join("public").exists());

    Ok(())
}
