//! Local preview server for the built output

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::Pavilion;

/// Server state
struct ServerState {
    public_dir: PathBuf,
    fallback: String,
}

/// Start the preview server over the generated site
pub async fn start(pavilion: &Pavilion, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        public_dir: pavilion.public_dir.clone(),
        fallback: pavilion.config.fallback.clone(),
    });

    let app = Router::new().fallback(fallback_handler).with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve static files, falling back to the configured 404 document
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);

    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        _ => serve_fallback(&state).await,
    }
}

/// Serve the fallback document with a 404 status
async fn serve_fallback(state: &ServerState) -> Response {
    let path = state.public_dir.join(&state.fallback);

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => (StatusCode::NOT_FOUND, Html(content)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
