use std::io;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::time;

use crate::connect::Connection;
use crate::error::ClientError;
use crate::record::Record;

/// Send `record` and read back one response.
///
/// Both the send and the receive are bounded by `io_timeout`. The response is a
/// single read of at most `buffer_size - 1` bytes; anything beyond that is left
/// unread. The connection is closed before returning, whatever the outcome.
pub async fn exchange(
    mut connection: Connection,
    record: &Record,
    io_timeout: Duration,
    buffer_size: usize,
) -> Result<String, ClientError> {
    let result = send_and_receive(&mut connection, record, io_timeout, buffer_size).await;

    // Best effort: the peer may already be gone. The socket closes on drop anyway.
    let _ = time::timeout(io_timeout, connection.stream.shutdown()).await;
    drop(connection);

    result
}

async fn send_and_receive(
    connection: &mut Connection,
    record: &Record,
    io_timeout: Duration,
    buffer_size: usize,
) -> Result<String, ClientError> {
    let request = record.to_wire();

    time::timeout(io_timeout, connection.stream.write_all(request.as_bytes()))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "send timed out"))??;

    // Sizes below 2 are raised to 2: one slot is always held back, so the
    // read needs at least one more byte to do anything.
    let mut buffer = vec![0u8; buffer_size.max(2)];
    let limit = buffer.len() - 1;

    // Once the request is out, an empty read, a reset or an expired deadline
    // all mean the same thing to the user: the server did not answer.
    let read = match time::timeout(io_timeout, connection.stream.read(&mut buffer[..limit])).await {
        Ok(Ok(n)) if n > 0 => n,
        _ => return Err(ClientError::NoResponse),
    };

    Ok(String::from_utf8_lossy(&buffer[..read]).into_owned())
}
