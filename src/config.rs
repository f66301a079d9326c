use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use crate::error::ClientError;
use crate::record::Record;

pub const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const DEFAULT_PORT: u16 = 5050;
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(3000);
pub const IO_TIMEOUT: Duration = Duration::from_millis(3000);
pub const RECV_BUFFER_SIZE: usize = 64;

/// Address of the record server. Resolved once, never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    host: Ipv4Addr,
    port: u16,
}

impl Endpoint {
    pub fn new(host: Ipv4Addr, port: u16) -> Self {
        Endpoint { host, port }
    }

    pub fn host(&self) -> Ipv4Addr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.host, self.port))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl From<SocketAddrV4> for Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Endpoint::new(*addr.ip(), addr.port())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Everything one client run needs, built at startup and passed down to the
/// connector and the session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Endpoint,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
    pub recv_buffer_size: usize,
}

impl ClientConfig {
    pub fn new(endpoint: Endpoint) -> Self {
        ClientConfig {
            endpoint,
            connect_timeout: CONNECT_TIMEOUT,
            io_timeout: IO_TIMEOUT,
            recv_buffer_size: RECV_BUFFER_SIZE,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(Endpoint::default())
    }
}

/// Where to send, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub endpoint: Endpoint,
    pub record: Record,
}

impl Target {
    /// Accepts either `<host> <name> <class> <grade>` or `<name> <class> <grade>`.
    /// The host must be a dotted IPv4 literal; the port is always [`DEFAULT_PORT`].
    pub fn from_args(args: &[String]) -> Result<Target, ClientError> {
        let (host, fields) = match args {
            [name, class_label, grade] => (DEFAULT_HOST, [name, class_label, grade]),
            [host, name, class_label, grade] => {
                let host: Ipv4Addr = host
                    .parse()
                    .map_err(|_| ClientError::Usage(format!("{} is not a valid IPv4 address", host)))?;
                (host, [name, class_label, grade])
            }
            _ => {
                return Err(ClientError::Usage(format!(
                    "expected 3 or 4 arguments, got {}",
                    args.len()
                )))
            }
        };

        let [name, class_label, grade] = fields;

        Ok(Target {
            endpoint: Endpoint::new(host, DEFAULT_PORT),
            record: Record::new(name, class_label, grade),
        })
    }
}
