// Listener module
// Binds the serving socket on all interfaces

use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Create a `TcpListener` on `0.0.0.0:port`.
///
/// `SO_REUSEADDR` is enabled on Unix so a restart is not blocked by sockets
/// in `TIME_WAIT`; `SO_REUSEPORT` is never set, so a second instance on the
/// same port fails with [`ServerError::AddressInUse`].
///
/// Must be called from within a tokio runtime.
pub fn bind_listener(port: u16) -> Result<TcpListener, ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    create_listener(addr).map_err(|e| ServerError::from_bind(port, e))
}

fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;

    #[cfg(unix)]
    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;

    // Start listening with a backlog queue size of 128
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
