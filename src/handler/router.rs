//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method dispatch, static file
//! serving and the finalize step (CORS headers and access log).

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header;
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) URI path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
    pub has_if_none_match: bool,
}

impl<'a> RequestContext<'a> {
    pub fn from_parts(parts: &'a Parts) -> Self {
        Self {
            path: parts.uri.path(),
            query: parts.uri.query(),
            is_head: parts.method == Method::HEAD,
            if_modified_since: parts
                .headers
                .get(header::IF_MODIFIED_SINCE)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
            has_if_none_match: parts.headers.contains_key(header::IF_NONE_MATCH),
        }
    }
}

/// Main entry point for HTTP request handling
///
/// Never fails: every outcome, including errors, becomes a response that has
/// been through [`finalize_response`].
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<ServerConfig>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Static files never need the request body
    let (parts, _) = req.into_parts();

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.set_version(parts.version);

    let response = route_request(&parts, &config).await;
    Ok(finalize_response(response, entry))
}

/// Dispatch on method: GET/HEAD serve files, anything else is unsupported
async fn route_request(parts: &Parts, config: &ServerConfig) -> Response<Full<Bytes>> {
    match parts.method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext::from_parts(parts);
            static_files::serve_path(&ctx, &config.root_directory).await
        }
        ref method => http::build_error_response(
            StatusCode::NOT_IMPLEMENTED,
            &format!("Unsupported method ('{method}')"),
            false,
        ),
    }
}

/// Stamp the CORS headers on `response` and write its access log line
pub fn finalize_response(
    mut response: Response<Full<Bytes>>,
    mut entry: AccessLogEntry,
) -> Response<Full<Bytes>> {
    http::apply_cors_headers(response.headers_mut());

    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    logger::log_access(&entry);

    response
}
