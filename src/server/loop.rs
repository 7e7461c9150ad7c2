// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::ServerConfig;
use crate::logger;

/// Accept connections on `listener` until `shutdown` completes; returns its output.
///
/// The listener is dropped on return, so new connections are refused as soon
/// as this function finishes. In-flight connection tasks are not awaited.
pub async fn start_server_loop<F>(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: F,
) -> F::Output
where
    F: Future,
{
    tokio::pin!(shutdown);

    let output = loop {
        tokio::select! {
            output = &mut shutdown => break output,

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &config),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
        }
    };

    drop(listener);
    output
}
