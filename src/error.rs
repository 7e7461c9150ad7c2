//! Startup error taxonomy
//!
//! Per-request failures never surface here: the handler turns them into
//! 403/404/500 responses. These errors end the process.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("port {port} is already in use")]
    AddressInUse { port: u16 },

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve serving directory: {0}")]
    RootDirectory(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ServerError {
    /// Classify a failed `bind(2)` on `port`
    pub fn from_bind(port: u16, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::AddrInUse {
            Self::AddressInUse { port }
        } else {
            Self::Bind { port, source }
        }
    }

    pub const fn is_address_in_use(&self) -> bool {
        matches!(self, Self::AddressInUse { .. })
    }
}
