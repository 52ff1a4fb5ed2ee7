//! The web server: accept loop, routing, and the per-connection pipeline.

use std::net::SocketAddr;
use std::time::Duration;
use log::{debug, error, info};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;

use crate::parser::{drain_headers, read_request_line, Error as ParserError, RequestLine};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::lookup::{LookupBackend, LOOKUP_PREFIX};
use crate::server::response::{send_error, StatusCode};
use crate::server::static_files::serve_file;

/// Where a validated URI is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// URIs with the `/mdb-lookup` prefix go to the lookup bridge.
    Lookup,
    /// Everything else maps into the web root.
    StaticFile,
}

/// Dispatch on the lookup prefix. The comparison is case-sensitive and
/// covers exactly the 11 prefix characters.
pub fn route(uri: &str) -> Route {
    if uri.starts_with(LOOKUP_PREFIX) {
        Route::Lookup
    } else {
        Route::StaticFile
    }
}

/// Map a parse/validation failure to the status sent to the client.
fn status_for(err: &ParserError) -> StatusCode {
    match err {
        ParserError::UnsupportedMethod(_) | ParserError::UnsupportedVersion(_) => {
            StatusCode::NotImplemented
        }
        _ => StatusCode::BadRequest,
    }
}

/// One access-log line per completed or failed request, with `-` standing
/// in for request-line fields the parse never produced.
fn access_log(addr: SocketAddr, line: Option<&RequestLine>, status: StatusCode) {
    let code = status.code();
    let reason = StatusCode::reason_for(code);
    match line {
        Some(line) => info!(
            "{} \"{} {} {}\" {code} {reason}",
            addr.ip(),
            line.method,
            line.uri,
            line.version
        ),
        None => info!("{} \"- - -\" {code} {reason}", addr.ip()),
    }
}

/// The web server.
///
/// Owns the configuration and the single backend connection. Connections
/// are served strictly one at a time: the accept loop does not take the
/// next connection until the current one has been answered and logged.
/// That serialization is also what keeps the backend exchange exclusive to
/// one request.
pub struct WebServer<R = BufReader<OwnedReadHalf>, W = OwnedWriteHalf> {
    config: ServerConfig,
    backend: LookupBackend<R, W>,
}

impl WebServer {
    /// Connect to the lookup backend and build the server. The backend
    /// connection is made before the listening socket exists, and a
    /// failure here is fatal.
    pub async fn new(config: ServerConfig) -> Result<Self, Error> {
        let backend = LookupBackend::connect(&config.lookup_host, config.lookup_port)
            .await
            .map_err(Error::BackendConnect)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Bind the listening socket and serve until Ctrl+C.
    pub async fn run(&mut self) -> Result<(), Error> {
        let listener = TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Bind)?;
        info!("Listening on http://{addr}", addr = self.config.addr);
        info!("Serving files from {root}", root = self.config.web_root.display());

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down");
                    break;
                }

                accepted = listener.accept() => {
                    match accepted {
                        Ok((socket, addr)) => self.serve_client(socket, addr).await,
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Drive one connection through the pipeline, log the outcome, and drop
    /// the socket (which closes it and delimits the response body).
    async fn serve_client(&mut self, socket: TcpStream, addr: SocketAddr) {
        let (read_half, mut write_half) = socket.into_split();
        let mut reader = BufReader::new(read_half);
        let mut line = None;
        let status = self
            .handle_request(&mut reader, &mut write_half, &mut line)
            .await;
        access_log(addr, line.as_ref(), status);
    }
}

impl<R, W> WebServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Build a server around an already-connected backend.
    pub fn with_backend(config: ServerConfig, backend: LookupBackend<R, W>) -> Self {
        Self { config, backend }
    }

    /// Parse, route, and answer one request, returning the status sent.
    ///
    /// The raw request line, once read, is stored in `line_out` so the
    /// caller can log it even when validation rejects the request.
    pub async fn handle_request<C, S>(
        &mut self,
        reader: &mut C,
        socket: &mut S,
        line_out: &mut Option<RequestLine>,
    ) -> StatusCode
    where
        C: AsyncBufRead + Unpin,
        S: AsyncWrite + Unpin,
    {
        let raw = match read_request_line(reader).await {
            Ok(raw) => raw,
            Err(e) => return reject(socket, &e).await,
        };
        *line_out = Some(raw.clone());

        let request = match raw.validate() {
            Ok(request) => request,
            Err(e) => return reject(socket, &e).await,
        };

        if let Err(e) = drain_headers(reader).await {
            return reject(socket, &e).await;
        }

        match route(&request.uri) {
            Route::Lookup => self.backend.handle(&request.uri, socket).await,
            Route::StaticFile => serve_file(&self.config.web_root, &request.uri, socket).await,
        }
    }
}

/// Send the error page for a rejected request, returning its status.
async fn reject<S>(socket: &mut S, err: &ParserError) -> StatusCode
where
    S: AsyncWrite + Unpin,
{
    let status = status_for(err);
    debug!("Rejecting request: {err}");
    if let Err(e) = send_error(socket, status).await {
        debug!("Error writing {code} response: {e}", code = status.code());
    }
    status
}
