//! Request handler module
//!
//! Method dispatch, path resolution and static file serving, plus the shared
//! finalize step that every response passes through.

pub mod listing;
pub mod router;
pub mod static_files;

#[cfg(test)]
mod testutil;

// Re-export main entry point
pub use router::{finalize_response, handle_request};
