use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::Response,
    routing::get,
    Router,
};
use leptos::prelude::LeptosOptions;
use mime_guess::MimeGuess;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Site icons served straight from the site root.
pub const ICON_ROUTES: [&str; 5] = [
    "/favicon.ico",
    "/favicon-16x16.png",
    "/favicon-32x32.png",
    "/apple-touch-icon.png",
    "/site.webmanifest",
];

pub fn create_icon_routes() -> Router<LeptosOptions> {
    ICON_ROUTES
        .iter()
        .fold(Router::new(), |router, route| router.route(route, get(site_icon)))
}

async fn site_icon(
    State(options): State<LeptosOptions>,
    uri: Uri,
) -> Result<Response<Body>, StatusCode> {
    serve_site_icon(&options.site_root, uri.path()).await
}

/// Reads `path` relative to `site_root` and wraps it in a cacheable response.
pub async fn serve_site_icon(site_root: &str, path: &str) -> Result<Response<Body>, StatusCode> {
    let filename = path.trim_start_matches('/');
    if filename.is_empty() || filename.contains("..") {
        warn!("Rejected icon request for `{}`", path);
        return Err(StatusCode::NOT_FOUND);
    }

    let file_path = Path::new(site_root).join(filename);
    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Icon `{}` unavailable: {}", file_path.display(), e);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let mime_type = icon_mime_type(filename);
    info!("Serving icon {} ({} bytes, MIME: {})", filename, content.len(), mime_type);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(Body::from(content))
        .map_err(|e| {
            error!("Failed to build icon response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

fn icon_mime_type(filename: &str) -> String {
    // not every mime_guess release knows the web app manifest extension
    if filename.ends_with(".webmanifest") {
        return "application/manifest+json".to_string();
    }
    MimeGuess::from_path(filename)
        .first_or_octet_stream()
        .to_string()
}
