//! Status codes and response writing.
//!
//! Responses are framed as HTTP/1.0 with no headers at all: a status line,
//! a blank line, then the body. Clients detect the end of the body by the
//! connection closing.

use std::fmt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// The status codes this server produces, with their reason phrases.
///
/// The set is fixed; there is no way to construct any other code at
/// runtime. [`StatusCode::reason_for`] covers numeric codes outside the
/// set with the sentinel reason `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Forbidden = 403,
    NotFound = 404,
    NotImplemented = 501,
}

impl StatusCode {
    /// The numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// The standard reason phrase for this status code.
    pub fn reason_phrase(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// Reason phrase for an arbitrary numeric code; `"Unknown"` for codes
    /// outside the table.
    pub fn reason_for(code: u16) -> &'static str {
        match code {
            200 => "OK",
            400 => "Bad Request",
            403 => "Forbidden",
            404 => "Not Found",
            501 => "Not Implemented",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

/// Write the status line: `HTTP/1.0 <code> <reason>\r\n`.
///
/// The wire version is always 1.0, regardless of what the request line
/// said; every response ends with the connection closing.
pub async fn send_status<W>(socket: &mut W, status: StatusCode) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = format!("HTTP/1.0 {status}\r\n");
    socket.write_all(line.as_bytes()).await
}

/// Write a complete error response: status line, blank line, and a minimal
/// HTML body naming the code and reason.
pub async fn send_error<W>(socket: &mut W, status: StatusCode) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    send_status(socket, status).await?;
    socket.write_all(b"\r\n").await?;
    let body = format!("<html><body><h1>{status}</h1></body></html>\n");
    socket.write_all(body.as_bytes()).await
}
