//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;
use std::sync::Arc;

use crate::error::{InventoryError, Result};
use crate::protocol::{dispatch, Response};
use crate::store::InventoryStore;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Handle to the shared record store
    store: Arc<InventoryStore>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O over cloned read/write handles
    pub fn new(stream: TcpStream, store: Arc<InventoryStore>) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            store,
            peer_addr,
        })
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads one newline-delimited JSON request per iteration, dispatches it,
    /// and writes the response back on the same stream. Returns when the
    /// client disconnects or a transport error occurs; domain errors never
    /// tear the connection down.
    pub fn handle(&mut self) -> Result<()> {
        tracing::info!("Nueva conexión desde {}", self.peer_addr);

        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    // Client disconnected gracefully
                    tracing::info!("Conexión cerrada con {}", self.peer_addr);
                    return Ok(());
                }
                Err(InventoryError::Io(ref e))
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::ConnectionReset
                            | std::io::ErrorKind::ConnectionAborted
                    ) =>
                {
                    tracing::debug!("Conexión reiniciada por {}", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error leyendo de {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            tracing::debug!("Solicitud de {}: {}", self.peer_addr, line.trim());

            let response = dispatch(&self.store, &line);

            if let Err(e) = self.send_response(&response) {
                // Client may vanish between the request and the response;
                // treat that as a normal disconnect rather than a server error.
                if let InventoryError::Io(ref io_err) = e {
                    match io_err.kind() {
                        std::io::ErrorKind::ConnectionAborted
                        | std::io::ErrorKind::ConnectionReset
                        | std::io::ErrorKind::BrokenPipe => {
                            tracing::debug!(
                                "Cliente {} desconectado antes de recibir la respuesta",
                                self.peer_addr
                            );
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                tracing::warn!("Error escribiendo a {}: {}", self.peer_addr, e);
                return Err(e);
            }

            tracing::debug!("Respuesta enviada a {}", self.peer_addr);
        }
    }

    /// Read one message line; `None` on end-of-stream
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Serialize and send one response line
    fn send_response(&mut self, response: &Response) -> Result<()> {
        serde_json::to_writer(&mut self.writer, response)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
