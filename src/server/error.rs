//! Error types for the web server.
//!
//! Only startup failures surface as errors; once the accept loop is
//! running, per-connection problems are downgraded to a status code plus a
//! log line and never stop the server.

use thiserror::Error;

/// Errors that are fatal at startup.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be created or bound.
    #[error("Failed to bind listening socket: {0}")]
    Bind(#[source] std::io::Error),

    /// The mdb-lookup backend could not be reached.
    #[error("Failed to connect to mdb-lookup server: {0}")]
    BackendConnect(#[source] std::io::Error),
}
