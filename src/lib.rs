//! A minimal HTTP/1.0 web server with an mdb-lookup proxy endpoint.
//!
//! The server answers plain-TCP HTTP requests with one of two things:
//! static files rooted at a configured directory, or the results of a key
//! lookup forwarded to a separate line-oriented backend service. Every
//! response is framed as HTTP/1.0 with no headers, and the connection
//! closes after each response.
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use mdb_web::{read_request, Method, HttpVersion};
//! use tokio::io::BufReader;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let bytes: &[u8] = b"GET /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n";
//! let mut reader = BufReader::new(bytes);
//!
//! let request = read_request(&mut reader).await.unwrap();
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.uri, "/index.html");
//! assert_eq!(request.version, HttpVersion::Http10);
//! # });
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use mdb_web::{ServerConfig, WebServer};
//! use std::path::PathBuf;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let config = ServerConfig {
//!     addr: "0.0.0.0:8888".parse().unwrap(),
//!     web_root: PathBuf::from("/srv/www"),
//!     lookup_host: "localhost".to_string(),
//!     lookup_port: 9999,
//! };
//!
//! let mut server = WebServer::new(config).await.unwrap();
//! server.run().await.unwrap();
//! # });
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{
    drain_headers, read_request, read_request_line, Error as ParserError, HttpVersion, Method,
    Request, RequestLine,
};
pub use server::{
    route, send_error, send_status, Error as ServerError, LookupBackend, Route, ServerConfig,
    StatusCode, TcpLookupBackend, WebServer,
};
