//! Web server implementation for mdb-web.
//!
//! Serves static files rooted at a configured directory and proxies
//! `/mdb-lookup` queries to a line-oriented key/value backend.

mod response;
mod config;
mod error;
mod static_files;
mod lookup;
mod http_server;

// Re-export public items
pub use response::{send_error, send_status, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use static_files::{serve_file, DISK_IO_BUF_SIZE};
pub use lookup::{LookupBackend, TcpLookupBackend, LOOKUP_PREFIX};
pub use http_server::{route, Route, WebServer};
