//! Network Module
//!
//! TCP server and per-client connection handling.
//!
//! ## Architecture
//! - Single acceptor loop
//! - One worker thread per accepted connection, unbounded
//! - Requests routed through the Protocol Dispatcher
//! - Workers share nothing beyond the `Arc<InventoryStore>`

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
