// Connection handling module
// Serves one accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Errors (and panics) stay inside the task: a broken connection is logged
/// and the accept loop carries on.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, config: &Arc<ServerConfig>) {
    let config = Arc::clone(config);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            handler::handle_request(req, Arc::clone(&config), peer_addr)
        });

        if let Err(err) = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            logger::log_connection_error(&err);
        }
    });
}
