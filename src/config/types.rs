// Configuration types module
// Defines the server configuration and its layered settings source

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Port used when `--port` is not given
pub const DEFAULT_PORT: u16 = 8000;

/// Settings resolved from defaults and command-line overrides
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
}

/// Immutable server configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Canonical, absolute directory every request path resolves under
    pub root_directory: PathBuf,
}

impl ServerConfig {
    /// Build a configuration serving `root_directory`.
    ///
    /// The directory is canonicalised here so every later containment check
    /// compares against the same absolute path.
    pub fn new(port: u16, root_directory: impl AsRef<Path>) -> io::Result<Self> {
        let root_directory = root_directory.as_ref().canonicalize()?;
        if !root_directory.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root_directory.display()),
            ));
        }
        Ok(Self {
            port,
            root_directory,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
