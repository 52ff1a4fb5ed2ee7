//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while reading and validating a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended before a request line could be read.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line did not split into exactly three tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The HTTP method in the request is not supported.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// The HTTP version in the request is not supported.
    #[error("Unsupported HTTP version: {0}")]
    UnsupportedVersion(String),

    /// The URI does not start with `/`.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The URI attempts to escape the served root with `..` segments.
    #[error("URI rejected by path guard: {0}")]
    PathTraversal(String),

    /// The stream ended before the blank line terminating the headers.
    #[error("Header block not terminated")]
    UnterminatedHeaders,

    /// I/O error while reading from the connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
