//! HTTP request reading and validation.

use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::path::has_traversal;
use crate::parser::version::HttpVersion;

/// Maximum number of bytes read for the request line.
pub const MAX_REQUEST_LINE: usize = 2000;

/// Maximum number of bytes read per header line.
pub const MAX_HEADER_LINE: usize = 1000;

/// The three raw tokens of a request line, before any validation.
///
/// Kept around even when validation fails so the access log can report what
/// the client actually sent.
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: String,
    pub uri: String,
    pub version: String,
}

/// A validated request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub uri: String,
    pub version: HttpVersion,
}

impl RequestLine {
    /// Validate the raw tokens into a typed [`Request`].
    ///
    /// Checks run in a fixed order so the status code a client sees is
    /// deterministic: method, then version, then the leading `/`, then the
    /// path guard.
    pub fn validate(&self) -> Result<Request, Error> {
        let method = Method::from_str(&self.method)?;
        let version = HttpVersion::from_str(&self.version)?;
        if !self.uri.starts_with('/') {
            return Err(Error::InvalidUri(self.uri.clone()));
        }
        if has_traversal(&self.uri) {
            return Err(Error::PathTraversal(self.uri.clone()));
        }
        Ok(Request {
            method,
            uri: self.uri.clone(),
            version,
        })
    }
}

/// Read one line from the stream, consuming at most `max` bytes.
///
/// Returns `Ok(None)` on immediate EOF. A line longer than `max` comes back
/// truncated at the limit, without its terminator; the caller's token or
/// blank-line checks then reject it.
async fn read_line_bounded<R>(reader: &mut R, max: usize) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let mut limited = reader.take(max as u64);
    let n = limited.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Read the request line and split it into its three tokens.
///
/// Exactly three whitespace-separated tokens are required; any other count
/// is a malformed request line. The split is non-destructive: each token is
/// copied out of the owned line buffer.
pub async fn read_request_line<R>(reader: &mut R) -> Result<RequestLine, Error>
where
    R: AsyncBufRead + Unpin,
{
    let line = match read_line_bounded(reader, MAX_REQUEST_LINE).await? {
        Some(line) => line,
        None => return Err(Error::EmptyRequest),
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedRequestLine(line.trim_end().to_string()));
    }

    Ok(RequestLine {
        method: tokens[0].to_string(),
        uri: tokens[1].to_string(),
        version: tokens[2].to_string(),
    })
}

/// Read and discard header lines until the blank line ending the block.
///
/// Header contents are not interpreted. EOF before the blank line is an
/// error; the client never finished its request.
pub async fn drain_headers<R>(reader: &mut R) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let header = match read_line_bounded(reader, MAX_HEADER_LINE).await? {
            Some(header) => header,
            None => return Err(Error::UnterminatedHeaders),
        };
        if header == "\r\n" || header == "\n" {
            return Ok(());
        }
    }
}

/// Read and validate one complete request: request line plus header block.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, Error>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_request_line(reader).await?;
    let request = line.validate()?;
    drain_headers(reader).await?;
    Ok(request)
}
