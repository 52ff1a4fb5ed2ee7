//! Static file serving.

use std::path::Path;
use log::warn;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::server::response::{send_error, send_status, StatusCode};

/// Chunk size for streaming file content to the client.
pub const DISK_IO_BUF_SIZE: usize = 4096;

/// Filename substituted when a URI ends in `/`.
const DEFAULT_INDEX: &str = "index.html";

/// Serve the file the URI maps to under `root`, returning the status that
/// was sent.
///
/// The URI is appended verbatim to the root; a trailing `/` maps to the
/// directory's `index.html`. A path that names a directory is 403 — no
/// listing is ever produced. A path that cannot be opened is 404.
/// Otherwise the body is the file's bytes, streamed in fixed-size chunks.
///
/// Write failures are logged, not returned: once the status line is out it
/// cannot be revised, so a mid-stream error just truncates the body.
pub async fn serve_file<W>(root: &Path, uri: &str, socket: &mut W) -> StatusCode
where
    W: AsyncWrite + Unpin,
{
    let mut path = root.as_os_str().to_os_string();
    path.push(uri);
    if uri.ends_with('/') {
        path.push(DEFAULT_INDEX);
    }

    if let Ok(meta) = fs::metadata(&path).await {
        if meta.is_dir() {
            if let Err(e) = send_error(socket, StatusCode::Forbidden).await {
                warn!("Error writing 403 response: {e}");
            }
            return StatusCode::Forbidden;
        }
    }

    let mut file = match fs::File::open(&path).await {
        Ok(file) => file,
        Err(_) => {
            if let Err(e) = send_error(socket, StatusCode::NotFound).await {
                warn!("Error writing 404 response: {e}");
            }
            return StatusCode::NotFound;
        }
    };

    let sent: std::io::Result<()> = async {
        send_status(socket, StatusCode::Ok).await?;
        socket.write_all(b"\r\n").await?;

        let mut buf = [0u8; DISK_IO_BUF_SIZE];
        loop {
            let n = match file.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    warn!("Error reading {}: {e}", path.to_string_lossy());
                    break;
                }
            };
            socket.write_all(&buf[..n]).await?;
        }
        Ok(())
    }
    .await;

    if let Err(e) = sent {
        warn!("Error streaming {} to client: {e}", path.to_string_lossy());
    }
    StatusCode::Ok
}
