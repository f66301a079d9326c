use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::config::Endpoint;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to create socket: {0}")]
    SocketCreate(#[source] io::Error),

    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: Endpoint,
        #[source]
        source: io::Error,
    },

    #[error("Failed to connect to {addr}: no answer after {}", human(.after))]
    Timeout { addr: Endpoint, after: Duration },

    #[error("I/O error during exchange: {0}")]
    Io(#[from] io::Error),

    /// The connection was fine but the server sent nothing back.
    #[error("No response from server")]
    NoResponse,
}

fn human(duration: &Duration) -> humantime::FormattedDuration {
    humantime::format_duration(*duration)
}

impl ClientError {
    /// Process exit status for this error.
    ///
    /// A missing response is reported to the user but does not make the run fail.
    pub fn exit_code(&self) -> u8 {
        match self {
            ClientError::NoResponse => 0,
            _ => 1,
        }
    }

    /// OS error code behind a connect failure, if any.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            ClientError::Connect { source, .. } => source.raw_os_error(),
            ClientError::SocketCreate(source) | ClientError::Io(source) => source.raw_os_error(),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppendError {
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open '{}' for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppendError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppendError::CreateDir { .. } | AppendError::Open { .. } => 2,
            AppendError::Write { .. } => 3,
        }
    }
}
