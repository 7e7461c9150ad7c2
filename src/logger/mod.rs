//! Logger module
//!
//! Console logging for the server:
//! - Startup banner and lifecycle lines (stdout)
//! - One access line per request (stdout)
//! - Request-level errors and warnings (stderr)

mod format;

pub use format::AccessLogEntry;

use crate::config::{ServerConfig, DEFAULT_PORT};
use crate::error::ServerError;
use chrono::Local;

const RULE: &str = "--------------------------------------------------";

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// Timestamp prefix for the shutdown line, e.g. `[19/Oct/2026 10:04:31]`
fn timestamp() -> String {
    Local::now().format("[%d/%b/%Y %H:%M:%S]").to_string()
}

pub fn log_banner(config: &ServerConfig) {
    let url = config.base_url();
    write_info("YeetFile HTTP Server");
    write_info(&format!(
        "Serving files from: {}",
        config.root_directory.display()
    ));
    write_info(&format!("Server URL: {url}"));
    write_info(&format!("Open {url} in your browser"));
    write_info("Press Ctrl+C to stop the server");
    write_info(RULE);
}

pub fn log_server_started(config: &ServerConfig, pages: &[String]) {
    let url = config.base_url();
    write_info(&format!(
        "[OK] Server started successfully on port {}",
        config.port
    ));
    write_info("Available files:");
    for page in pages {
        write_info(&format!("   - {url}/{page}"));
    }
    write_info(RULE);
}

/// Report a fatal startup error, with a remediation hint when the port is taken
pub fn log_startup_error(err: &ServerError) {
    match err {
        ServerError::AddressInUse { port } => {
            write_info(&format!(
                "[ERROR] Port {port} is already in use. Try a different port:"
            ));
            write_info(&format!("   {}", port_in_use_hint(*port)));
        }
        other => write_info(&format!("[ERROR] Error starting server: {other}")),
    }
}

/// Command line suggesting the next port up
fn port_in_use_hint(port: u16) -> String {
    let alternate = port.checked_add(1).unwrap_or(DEFAULT_PORT + 1);
    format!("{} --port {alternate}", env!("CARGO_PKG_NAME"))
}

pub fn log_shutdown(signal: &str) {
    write_info(&format!("\n{} Server stopped by user ({signal})", timestamp()));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.to_string());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
