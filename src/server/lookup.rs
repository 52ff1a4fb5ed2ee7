//! Bridge to the mdb-lookup backend.
//!
//! The backend speaks a line-oriented protocol over one long-lived TCP
//! connection: the server writes a key line, the backend answers with zero
//! or more record lines and then one empty line. Results are rendered for
//! the client as an HTML table under the lookup form.

use log::{error, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::server::response::{send_error, send_status, StatusCode};

/// URI prefix that routes a request to the lookup bridge.
pub const LOOKUP_PREFIX: &str = "/mdb-lookup";

/// URI prefix carrying a key; the raw remainder of the URI is the key.
const KEY_PREFIX: &str = "/mdb-lookup?key=";

/// Row background colors, cycled by a 1-based row counter. Row 1 is red,
/// row 8 is red again.
const ROW_COLORS: [&str; 7] = [
    "red", "orange", "yellow", "green", "blue", "indigo", "violet",
];

/// The lookup form, sent on every lookup response whether or not a key was
/// submitted.
const LOOKUP_FORM: &str = "<html><body>\n\
    <h1>mdb-lookup</h1>\n\
    <p>\n\
    <form method=GET action=/mdb-lookup>\n\
    lookup: <input type=text name=key>\n\
    <input type=submit>\n\
    </form>\n\
    <p>\n";

/// The single connection to the mdb-lookup backend.
///
/// Created once at startup and kept for the process lifetime; there is no
/// reconnect logic. A failed key write returns 501 for that request and the
/// same handle serves the next one. The serialized accept loop guarantees
/// only one request ever uses it at a time.
pub struct LookupBackend<R, W> {
    reader: R,
    writer: W,
}

/// The backend as connected over TCP.
pub type TcpLookupBackend = LookupBackend<BufReader<OwnedReadHalf>, OwnedWriteHalf>;

impl TcpLookupBackend {
    /// Establish the backend connection. Failure here is fatal at startup.
    pub async fn connect(host: &str, port: u16) -> std::io::Result<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(LookupBackend::new(BufReader::new(read_half), write_half))
    }
}

impl<R, W> LookupBackend<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take the connection halves back out.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Handle a lookup-prefixed URI, returning the status that was sent.
    ///
    /// A key, if present, is everything after `?key=`, forwarded to the
    /// backend without decoding. The response is always the lookup form;
    /// when a key was submitted it is followed by a table of the backend's
    /// records.
    pub async fn handle<S>(&mut self, uri: &str, socket: &mut S) -> StatusCode
    where
        S: AsyncWrite + Unpin,
    {
        let key = uri.strip_prefix(KEY_PREFIX);

        if let Some(key) = key {
            if let Err(e) = self.submit_key(key).await {
                error!("mdb-lookup backend write failed: {e}");
                if let Err(e) = send_error(socket, StatusCode::NotImplemented).await {
                    warn!("Error writing 501 response: {e}");
                }
                return StatusCode::NotImplemented;
            }
        }

        let sent: std::io::Result<()> = async {
            send_status(socket, StatusCode::Ok).await?;
            socket.write_all(b"\r\n").await?;
            socket.write_all(LOOKUP_FORM.as_bytes()).await?;
            if key.is_some() {
                socket.write_all(b"<p><table border>").await?;
                self.copy_records(socket).await?;
                socket.write_all(b"</table>").await?;
            }
            socket.write_all(b"</body></html>\n").await?;
            Ok(())
        }
        .await;

        if let Err(e) = sent {
            warn!("Error writing lookup response to client: {e}");
        }
        StatusCode::Ok
    }

    async fn submit_key(&mut self, key: &str) -> std::io::Result<()> {
        self.writer.write_all(key.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    /// Copy backend record lines into table rows until the terminating
    /// empty line (not emitted).
    ///
    /// A backend that closes the stream or errors before the empty line is
    /// treated as end-of-results, not as a failure. Record text goes into
    /// the cell verbatim, trailing newline included; nothing is escaped.
    async fn copy_records<S>(&mut self, socket: &mut S) -> std::io::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        let mut line = String::new();
        let mut row = 1usize;
        loop {
            line.clear();
            match self.reader.read_line(&mut line).await {
                Ok(0) => break,
                Ok(_) => {
                    if line == "\n" {
                        break;
                    }
                    let cell = format!("<tr><td bgcolor={}>", ROW_COLORS[(row - 1) % ROW_COLORS.len()]);
                    row += 1;
                    socket.write_all(cell.as_bytes()).await?;
                    socket.write_all(line.as_bytes()).await?;
                }
                Err(e) => {
                    warn!("mdb-lookup backend read failed: {e}");
                    break;
                }
            }
        }
        Ok(())
    }
}
