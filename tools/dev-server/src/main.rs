//! Development Server for the slide-deck presenter
//!
//! Serves the deck page and the wasm-bindgen output with correct MIME
//! types.
//!
//! - `PORT`: listen port (default 8080)
//! - `DECK_WEB_ROOT`: directory to serve (default `web`)
//! - `RUST_LOG`: log filter (default `info`)

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let web_root = std::env::var("DECK_WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    // Serve static files from the web directory
    let serve_dir = ServeDir::new(&web_root).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(add_headers));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("serving {} at http://localhost:{}", web_root, port);
    log::info!("press Ctrl+C to stop");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Content type for a request path, if it needs fixing
fn content_type_for(path: &str) -> Option<&'static str> {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match extension {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

/// Fix MIME types and disable caching of the deck bundle
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    // Get the request path for MIME type detection
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    let mut response = next.run(request).await;
    log::debug!("{} {} -> {}", method, path, response.status());

    let headers = response.headers_mut();
    if let Some(content_type) = content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    response
}
