//! YeetFile static-file server
//!
//! Serves the files next to the running executable over HTTP, stamps permissive
//! CORS headers on every response and writes an access line per request.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use crate::config::ServerConfig;
pub use error::ServerError;
pub use server::Server;
