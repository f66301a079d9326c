use std::time::Duration;

use tokio::net::{TcpSocket, TcpStream};
use tokio::time;

use crate::config::Endpoint;
use crate::error::ClientError;

/// A live TCP connection to the record server.
///
/// Owned by one exchange; dropping it closes the socket.
#[derive(Debug)]
pub struct Connection {
    pub(crate) stream: TcpStream,
    peer: Endpoint,
}

impl Connection {
    pub fn peer(&self) -> Endpoint {
        self.peer
    }
}

/// Open a TCP connection to `endpoint`, giving up after `timeout`.
///
/// The socket is non-blocking from the start: the connect call returns right
/// away (refused or unreachable hosts fail here), then the runtime waits for
/// the socket to become writable and checks its pending error before handing
/// the stream back. Only the wait is bounded by `timeout`; when it expires the
/// half-open socket is dropped and closed.
pub async fn connect_with_deadline(endpoint: &Endpoint, timeout: Duration) -> Result<Connection, ClientError> {
    let socket = TcpSocket::new_v4().map_err(ClientError::SocketCreate)?;

    match time::timeout(timeout, socket.connect(endpoint.socket_addr())).await {
        Ok(Ok(stream)) => Ok(Connection { stream, peer: *endpoint }),
        Ok(Err(source)) => Err(ClientError::Connect { addr: *endpoint, source }),
        Err(_) => Err(ClientError::Timeout { addr: *endpoint, after: timeout }),
    }
}
