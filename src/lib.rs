//! Send a student record (name, class, grade) to the record server over TCP
//! and show its one-line reply.

pub mod append;
pub mod cli;
pub mod config;
pub mod connect;
pub mod error;
pub mod record;
pub mod session;

use colored::Colorize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::record::Record;

/// One full run: connect, send `record`, return the server's reply.
pub async fn submit(config: &ClientConfig, record: &Record, silent: bool) -> Result<String, ClientError> {
    if !silent {
        eprintln!("Connecting to {}", config.endpoint.to_string().blue());
    }

    let connection = connect::connect_with_deadline(&config.endpoint, config.connect_timeout).await?;

    if !silent {
        eprintln!("Connected to {}", connection.peer().to_string().green());
    }

    session::exchange(connection, record, config.io_timeout, config.recv_buffer_size).await
}
