//! Client-side connection to an inventory server
//!
//! Wraps one persistent TCP connection: each call sends a single request
//! line and reads back a single response line.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

use serde_json::json;

use crate::error::{InventoryError, Result};
use crate::protocol::Response;
use crate::store::RecordDraft;

/// A client handle to a running inventory server
pub struct InventoryClient {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl InventoryClient {
    /// Connect to the server at the given address
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
        })
    }

    /// Register a new equipment record
    pub fn register(&mut self, draft: &RecordDraft) -> Result<Response> {
        self.send(&json!({
            "accion": "registrar",
            "codigo": draft.code,
            "nombre": draft.name,
            "tipo": draft.kind,
            "estado": draft.status,
        }))
    }

    /// Fetch the full inventory
    pub fn list(&mut self) -> Result<Response> {
        self.send(&json!({ "accion": "consultar" }))
    }

    /// Look up one record by code
    pub fn find(&mut self, code: &str) -> Result<Response> {
        self.send(&json!({ "accion": "buscar", "codigo": code }))
    }

    /// Change the status of a record
    pub fn update_status(&mut self, code: &str, status: &str) -> Result<Response> {
        self.send(&json!({
            "accion": "actualizar",
            "codigo": code,
            "estado": status,
        }))
    }

    /// Send one request value and read back its response envelope
    pub fn send(&mut self, request: &serde_json::Value) -> Result<Response> {
        serde_json::to_writer(&mut self.writer, request)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        self.read_response()
    }

    /// Send a raw payload, bypassing JSON encoding (used by tests)
    pub fn send_raw(&mut self, payload: &str) -> Result<Response> {
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        self.read_response()
    }

    fn read_response(&mut self) -> Result<Response> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(InventoryError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "servidor cerró la conexión",
            )));
        }
        Ok(serde_json::from_str(&line)?)
    }
}
