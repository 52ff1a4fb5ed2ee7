//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Directory the URI space is rooted at.
    pub web_root: PathBuf,
    /// Host of the mdb-lookup backend.
    pub lookup_host: String,
    /// Port of the mdb-lookup backend.
    pub lookup_port: u16,
}
