//! Access log format module
//!
//! Renders one request/response exchange in Common Log Format:
//! `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`

use chrono::Local;
use hyper::Version;
use std::fmt;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Record the protocol version as it appears in the request line
    pub fn set_version(&mut self, version: Version) {
        self.http_version = match version {
            Version::HTTP_09 => "0.9",
            Version::HTTP_10 => "1.0",
            Version::HTTP_2 => "2",
            Version::HTTP_3 => "3",
            _ => "1.1",
        }
        .to_string();
    }

    /// Request line, e.g. `GET /index.html?v=2 HTTP/1.1`
    pub fn request_line(&self) -> String {
        let query = self
            .query
            .as_ref()
            .map(|q| format!("?{q}"))
            .unwrap_or_default();
        format!(
            "{} {}{} HTTP/{}",
            self.method, self.path, query, self.http_version
        )
    }
}

impl fmt::Display for AccessLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/demo.html".to_string(),
        );
        entry.query = Some("room=42".to_string());
        entry.status = 200;
        entry.body_bytes = 1234;
        entry
    }

    #[test]
    fn test_common_log_format() {
        let log = create_test_entry().to_string();
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /demo.html?room=42 HTTP/1.1\""));
        assert!(log.ends_with("200 1234"));
    }

    #[test]
    fn test_timestamp_format() {
        let mut entry = create_test_entry();
        entry.time = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let log = entry.to_string();
        assert!(log.contains("[09/Mar/2024:14:05:07 "), "got: {log}");
    }

    #[test]
    fn test_version_mapping() {
        let mut entry = create_test_entry();
        entry.query = None;
        entry.set_version(Version::HTTP_10);
        assert_eq!(entry.request_line(), "GET /demo.html HTTP/1.0");
        entry.set_version(Version::HTTP_2);
        assert_eq!(entry.request_line(), "GET /demo.html HTTP/2");
    }
}
