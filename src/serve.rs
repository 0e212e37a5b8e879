//! Development server with automatic rebuild.
//!
//! A lightweight HTTP file server over the build output directory,
//! built on `tiny_http`:
//!
//! - Static file serving with MIME type detection
//! - Automatic `index.html` resolution for directories
//! - File watching and auto-rebuild (via the `watch` module)
//! - Graceful shutdown on Ctrl+C
//!
//! The request loop only reads the output tree; all writes happen on the
//! watcher thread under the rebuild lock.

use crate::{config::SitePaths, log, watch::watch_for_changes_blocking};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Cursor,
    path::Path,
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Start the development server, optionally with the file watcher.
///
/// Blocks until Ctrl+C is received.
pub fn serve_site(paths: &'static SitePaths, bind: &str, watch: bool) -> Result<()> {
    let server = Server::http(bind).map_err(|err| anyhow!("failed to bind `{bind}`: {err}"))?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    if watch {
        std::thread::spawn(move || {
            if let Err(err) = watch_for_changes_blocking(paths) {
                log!("watch"; "{err}");
            }
        });
    }

    log!("serve"; "listening on http://{bind}");

    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, &paths.output) {
            log!("serve"; "request error: {err}");
        }
    }

    Ok(())
}

/// Handle a single HTTP request.
///
/// Resolution order: exact file match, then `index.html` inside a
/// directory, then 404.
fn handle_request(request: Request, serve_root: &Path) -> Result<()> {
    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    // Strip query string before resolving the path
    let path_without_query = url_path.split('?').next().unwrap_or(&url_path);
    let request_path = path_without_query.trim_matches('/');
    let local_path = serve_root.join(request_path);

    if local_path.is_file() {
        return serve_file(request, &local_path);
    }

    if local_path.is_dir() {
        let index_path = local_path.join("index.html");
        if index_path.is_file() {
            return serve_file(request, &index_path);
        }
    }

    serve_not_found(request)
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content_type = guess_content_type(path);

    let response = Response::from_data(content)
        .with_header(Header::from_bytes("Content-Type", content_type).unwrap());

    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn serve_not_found(request: Request) -> Result<()> {
    let response = Response::new(
        StatusCode(404),
        vec![Header::from_bytes("Content-Type", "text/plain").unwrap()],
        Cursor::new("404 Not Found"),
        Some(13),
        None,
    );
    request.respond(response)?;
    Ok(())
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("md") => "text/markdown; charset=utf-8",

        _ => "application/octet-stream",
    }
}
