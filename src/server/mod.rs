// Server module entry point
// Binds the listener, runs the accept loop and handles shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust 不允许 loop 作为模块名（关键字），改用 server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;

pub use listener::bind_listener;
pub use server_loop::start_server_loop;
pub use signal::ShutdownSignal;

/// A bound static file server, ready to accept connections
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Bind `0.0.0.0:config.port`. Must be called from within a tokio runtime.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = bind_listener(config.port)?;
        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve until `shutdown` completes, then stop accepting connections
    pub async fn run_until<F>(self, shutdown: F) -> F::Output
    where
        F: Future,
    {
        start_server_loop(self.listener, self.config, shutdown).await
    }
}
