//! TCP Server
//!
//! Accepts connections and hands each one to its own worker thread.

use std::net::{SocketAddr, TcpListener, ToSocketAddrs};
use std::sync::Arc;
use std::thread;

use crate::error::Result;
use crate::store::InventoryStore;
use super::Connection;

/// TCP server for the inventory service
pub struct Server {
    /// Bound listening socket
    listener: TcpListener,

    /// Shared record store, handed to every worker
    store: Arc<InventoryStore>,
}

impl Server {
    /// Bind the server to the given address
    ///
    /// Binding to port 0 picks a free port; see [`Server::local_addr`].
    pub fn bind<A: ToSocketAddrs>(addr: A, store: Arc<InventoryStore>) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener, store })
    }

    /// Address the server is actually listening on
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the accept loop (blocking)
    ///
    /// Spawns one worker thread per accepted connection. Workers run until
    /// their client disconnects; a failure on one connection never affects
    /// the others. A failed accept is logged and the loop continues.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Servidor escuchando en {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let store = Arc::clone(&self.store);
                    thread::spawn(move || match Connection::new(stream, store) {
                        Ok(mut conn) => {
                            if let Err(e) = conn.handle() {
                                tracing::warn!(
                                    "Error manejando cliente {}: {}",
                                    conn.peer_addr(),
                                    e
                                );
                            }
                        }
                        Err(e) => tracing::warn!("Error preparando conexión: {}", e),
                    });
                }
                Err(e) => tracing::error!("Error al aceptar conexión: {}", e),
            }
        }
        Ok(())
    }
}
