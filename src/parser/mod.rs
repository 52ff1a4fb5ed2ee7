//! HTTP request parsing module.
//!
//! This module reads one request line plus its header block from a
//! connection stream and produces a validated [`Request`], or an error that
//! maps onto an HTTP status code.

mod request;
mod method;
mod version;
mod path;
mod error;

// Re-export public items
pub use request::{Request, RequestLine, MAX_REQUEST_LINE, MAX_HEADER_LINE};
pub use request::{read_request, read_request_line, drain_headers};
pub use method::Method;
pub use version::HttpVersion;
pub use path::has_traversal;
pub use error::Error;
