//! HTTP protocol layer module
//!
//! Response builders, CORS injection, content types, HTTP dates and URL/HTML
//! escaping. Nothing here touches the filesystem.

pub mod cache;
pub mod escape;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    apply_cors_headers, build_304_response, build_error_response, build_file_response,
    build_html_response, build_redirect_response, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS,
    CORS_ALLOW_ORIGIN,
};
