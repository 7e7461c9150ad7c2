//! Static file serving module
//!
//! Resolves request paths under the serving root and answers with the file,
//! the directory's index, a generated listing or an error page.

use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, escape, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// File served in place of a directory listing when present
pub const INDEX_FILE: &str = "index.html";

/// Outcome of mapping a request path onto the serving root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Canonical path, guaranteed to lie under the root
    Found(PathBuf),
    NotFound,
    /// Traversal attempt, rejected without touching the filesystem target
    Forbidden,
}

/// Map a raw (percent-encoded) request path onto `root`.
///
/// `root` must already be canonical. Empty and `.` segments are skipped;
/// `..` or any segment that is not a single plain path component rejects the
/// request. The joined path is canonicalised so symlinks pointing out of the
/// root are rejected as well.
pub async fn resolve_path(root: &Path, request_path: &str) -> Resolution {
    let decoded = escape::percent_decode(request_path);
    let mut candidate = root.to_path_buf();

    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if !is_plain_segment(segment) {
            logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
            return Resolution::Forbidden;
        }
        candidate.push(segment);
    }

    match contained(root, &candidate).await {
        Ok(Some(path)) => Resolution::Found(path),
        Ok(None) => {
            logger::log_warning(&format!(
                "Path escapes serving root: {} -> {}",
                request_path,
                candidate.display()
            ));
            Resolution::Forbidden
        }
        // Missing path (or unreadable component) is an ordinary 404
        Err(_) => Resolution::NotFound,
    }
}

/// Serve whatever `ctx.path` resolves to under `root`
pub async fn serve_path(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    let path = match resolve_path(root, ctx.path).await {
        Resolution::Found(path) => path,
        Resolution::NotFound => return not_found(ctx),
        Resolution::Forbidden => {
            return http::build_error_response(
                StatusCode::FORBIDDEN,
                "Path traversal is not allowed",
                ctx.is_head,
            )
        }
    };

    let metadata = match fs::metadata(&path).await {
        Ok(m) => m,
        Err(e) => return io_error_response(ctx, &path, &e),
    };
    let trailing_slash = ctx.path.ends_with('/');

    if metadata.is_dir() {
        if !trailing_slash {
            return http::build_redirect_response(&directory_location(ctx));
        }
        return serve_directory(ctx, root, &path).await;
    }

    if trailing_slash || !metadata.is_file() {
        return not_found(ctx);
    }
    serve_file(ctx, &path, &metadata).await
}

/// Serve `index.html` from `dir` if present, otherwise a listing
async fn serve_directory(
    ctx: &RequestContext<'_>,
    root: &Path,
    dir: &Path,
) -> Response<Full<Bytes>> {
    if let Ok(Some(index)) = contained(root, &dir.join(INDEX_FILE)).await {
        if let Ok(metadata) = fs::metadata(&index).await {
            if metadata.is_file() {
                return serve_file(ctx, &index, &metadata).await;
            }
        }
    }

    match listing::read_entries(dir).await {
        Ok(entries) => {
            let display_path = escape::percent_decode(ctx.path);
            let html = listing::render_listing(&display_path, &entries);
            http::build_html_response(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_warning(&format!("Cannot list directory '{}': {e}", dir.display()));
            http::build_error_response(
                StatusCode::NOT_FOUND,
                "No permission to list directory",
                ctx.is_head,
            )
        }
    }
}

/// Serve a regular file, honouring `If-Modified-Since`
async fn serve_file(
    ctx: &RequestContext<'_>,
    path: &Path,
    metadata: &std::fs::Metadata,
) -> Response<Full<Bytes>> {
    let modified = metadata.modified().ok();
    let last_modified = modified.map(cache::format_http_date);

    if let (Some(modified), Some(last_modified)) = (modified, last_modified.as_deref()) {
        if cache::is_not_modified(
            ctx.if_modified_since.as_deref(),
            ctx.has_if_none_match,
            modified,
        ) {
            return http::build_304_response(last_modified);
        }
    }

    match fs::read(path).await {
        Ok(content) => http::build_file_response(
            Bytes::from(content),
            mime::content_type_for(path),
            last_modified.as_deref(),
            ctx.is_head,
        ),
        Err(e) => io_error_response(ctx, path, &e),
    }
}

/// List the `*.html` pages directly under `root`, sorted by name
pub async fn discover_html_pages(root: &Path) -> io::Result<Vec<String>> {
    let mut read_dir = fs::read_dir(root).await?;
    let mut pages = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !name.ends_with(".html") {
            continue;
        }
        if fs::metadata(entry.path()).await.is_ok_and(|m| m.is_file()) {
            pages.push(name);
        }
    }

    pages.sort();
    Ok(pages)
}

/// Canonicalise `path`; `Ok(None)` when it resolves outside `root`
async fn contained(root: &Path, path: &Path) -> io::Result<Option<PathBuf>> {
    let canonical = fs::canonicalize(path).await?;
    Ok(canonical.starts_with(root).then_some(canonical))
}

fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Location header value adding the trailing slash to a directory request.
/// Leading slashes collapse to one so `//host` never becomes a
/// protocol-relative redirect.
fn directory_location(ctx: &RequestContext<'_>) -> String {
    let path = ctx.path.trim_start_matches('/');
    match ctx.query {
        Some(query) => format!("/{path}/?{query}"),
        None => format!("/{path}/"),
    }
}

fn not_found(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    http::build_error_response(StatusCode::NOT_FOUND, "File not found", ctx.is_head)
}

fn io_error_response(
    ctx: &RequestContext<'_>,
    path: &Path,
    err: &io::Error,
) -> Response<Full<Bytes>> {
    if err.kind() == io::ErrorKind::NotFound {
        return not_found(ctx);
    }
    logger::log_error(&format!("Failed to read '{}': {err}", path.display()));
    http::build_error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unable to read the requested file",
        ctx.is_head,
    )
}
