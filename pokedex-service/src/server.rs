use std::{
    net::SocketAddr,
    str,
    sync::Arc,
};

use anyhow::{
    Error,
    Result,
};
use log::{
    debug,
    error,
    info,
};
use pokedex::{
    DataStore,
    dex::Dex,
    error::WrapResultError,
};
use tokio::{
    io::{
        AsyncBufRead,
        AsyncBufReadExt,
        AsyncReadExt,
        AsyncWriteExt,
        BufReader,
        Take,
    },
    net::{
        TcpListener,
        TcpStream,
    },
    sync::broadcast,
    task::JoinHandle,
};

use crate::{
    config::ServerConfig,
    handler::handle,
    http::{
        Method,
        Request,
        Response,
        StatusCode,
    },
};

/// Upper bound on the size of a request head, in bytes.
const MAX_HEAD_SIZE: u64 = 8 * 1024;

/// A request head read from a connection.
enum RequestHead {
    /// The peer closed the connection without sending anything.
    Closed,
    /// The head did not end within [`MAX_HEAD_SIZE`] bytes.
    TooLarge,
    /// The raw request line. Header lines are consumed and dropped.
    RequestLine(Vec<u8>),
}

/// A single line read from a request head.
enum HeadLine {
    Complete,
    Closed,
    TooLarge,
}

/// Handle to a running [`Server`].
pub struct ServerHandle {
    start_handle: JoinHandle<()>,
    local_addr: SocketAddr,
    cancel_tx: broadcast::Sender<()>,
}

impl ServerHandle {
    /// Waits for the server to stop accepting connections.
    pub async fn join(self) -> Result<()> {
        self.start_handle.await.map_err(Error::new)
    }

    /// Stops accepting new connections.
    ///
    /// Connections already accepted are served to completion.
    pub fn cancel(&self) -> Result<()> {
        self.cancel_tx.send(()).map(|_| ()).map_err(Error::new)
    }

    /// The address the server is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

/// A plain-text HTTP/1.1 server over a read-only data store.
///
/// Every connection carries exactly one request. The data store is shared by all connections and
/// is never modified, so requests are served concurrently without coordination.
pub struct Server {
    config: ServerConfig,
    data: Arc<dyn DataStore>,
    cancel_tx: broadcast::Sender<()>,
}

impl Server {
    /// Creates a new server.
    pub fn new(config: ServerConfig, data: Arc<dyn DataStore>) -> Self {
        let (cancel_tx, _) = broadcast::channel(1);
        Self {
            config,
            data,
            cancel_tx,
        }
    }

    /// Binds the listener and starts accepting connections in the background.
    pub async fn start(self) -> Result<ServerHandle> {
        let addr = format!("{}:{}", self.config.address, self.config.port);
        info!(
            "Starting server {} at {addr}: {:?}",
            self.config.agent, self.config
        );
        let listener = TcpListener::bind(&addr)
            .await
            .wrap_error_with_message(format!("failed to bind {addr}"))?;
        let local_addr = listener.local_addr()?;
        info!("Listening on {local_addr}");

        let cancel_tx = self.cancel_tx.clone();
        let cancel_rx = self.cancel_tx.subscribe();
        let start_handle = tokio::spawn(Self::handle_connections(
            Arc::new(self),
            listener,
            cancel_rx,
        ));

        Ok(ServerHandle {
            start_handle,
            local_addr,
            cancel_tx,
        })
    }

    async fn handle_connections(
        server: Arc<Self>,
        listener: TcpListener,
        mut cancel_rx: broadcast::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                accept = listener.accept() => {
                    let (stream, addr) = match accept {
                        Ok((stream, addr)) => (stream, addr),
                        Err(err) => {
                            error!("Failed to accept connection: {err}");
                            break;
                        }
                    };
                    tokio::spawn(Self::handle_connection(server.clone(), stream, addr));
                }
                _ = cancel_rx.recv() => {
                    break;
                }
            }
        }
        info!("Server {} stopped accepting connections", server.config.agent);
    }

    async fn handle_connection(server: Arc<Self>, stream: TcpStream, addr: SocketAddr) {
        debug!("Incoming TCP connection from {addr}");
        if let Err(err) = server.serve_connection(stream).await {
            error!("Failed to serve connection from {addr}: {err:#}");
        }
    }

    async fn serve_connection(&self, mut stream: TcpStream) -> Result<()> {
        let (reader, mut writer) = stream.split();
        let mut reader = BufReader::new(reader);

        let (response, include_body) = match Self::read_head(&mut reader).await? {
            RequestHead::Closed => {
                debug!("Connection closed before sending a request");
                return Ok(());
            }
            RequestHead::TooLarge => {
                info!("431 Error: Request head exceeds {MAX_HEAD_SIZE} bytes");
                (
                    Response::error(
                        StatusCode::RequestHeaderFieldsTooLarge,
                        "431 Request Header Fields Too Large",
                    ),
                    true,
                )
            }
            RequestHead::RequestLine(line) => self.respond(&line),
        };

        writer
            .write_all(&response.to_bytes(&self.config.agent, include_body))
            .await?;
        writer.shutdown().await?;
        Ok(())
    }

    fn respond(&self, request_line: &[u8]) -> (Response, bool) {
        let request = str::from_utf8(request_line)
            .wrap_error_with_message("request line is not valid UTF-8")
            .and_then(Request::parse_request_line);
        match request {
            Ok(request) => {
                debug!("{} {}", request.method, request.path);
                let dex = Dex::new(&*self.data);
                (handle(&dex, &request), request.method != Method::Head)
            }
            Err(err) => {
                info!("400 Error: Malformed request line: {err:#}");
                (
                    Response::error(StatusCode::BadRequest, "400 Bad Request"),
                    true,
                )
            }
        }
    }

    /// Reads the request line and consumes header lines up to the blank line that ends the head.
    ///
    /// At most [`MAX_HEAD_SIZE`] bytes are read, no matter how the head is split into lines.
    async fn read_head<R>(reader: &mut R) -> Result<RequestHead>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut reader = reader.take(MAX_HEAD_SIZE);
        let mut request_line = Vec::new();
        match Self::read_head_line(&mut reader, &mut request_line).await? {
            HeadLine::TooLarge => return Ok(RequestHead::TooLarge),
            HeadLine::Closed if request_line.is_empty() => return Ok(RequestHead::Closed),
            HeadLine::Closed => return Ok(RequestHead::RequestLine(request_line)),
            HeadLine::Complete => (),
        }

        let mut line = Vec::new();
        loop {
            match Self::read_head_line(&mut reader, &mut line).await? {
                HeadLine::TooLarge => return Ok(RequestHead::TooLarge),
                HeadLine::Closed => break,
                HeadLine::Complete if line.trim_ascii().is_empty() => break,
                HeadLine::Complete => (),
            }
        }
        Ok(RequestHead::RequestLine(request_line))
    }

    async fn read_head_line<R>(reader: &mut Take<R>, line: &mut Vec<u8>) -> Result<HeadLine>
    where
        R: AsyncBufRead + Unpin,
    {
        line.clear();
        reader.read_until(b'\n', line).await?;
        if line.ends_with(b"\n") {
            Ok(HeadLine::Complete)
        } else if reader.limit() == 0 {
            Ok(HeadLine::TooLarge)
        } else {
            Ok(HeadLine::Closed)
        }
    }
}
