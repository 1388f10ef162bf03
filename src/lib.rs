//! # labinv
//!
//! A small network-accessible inventory store for laboratory equipment:
//! - JSON requests over persistent TCP connections
//! - In-memory record collection behind a single exclusive lock
//! - Full-file JSON persistence on every mutation
//! - One worker thread per client connection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                             │
//! │                (one thread per client)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  newline-delimited JSON
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Protocol Dispatcher                         │
//! │        (registrar / consultar / buscar / actualizar)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  InventoryStore                             │
//! │                 (Mutex<Vec<Record>>)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  save on mutation
//!                       ▼
//!               ┌─────────────────┐
//!               │ inventario.json │
//!               └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod persistence;
pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use store::{InventoryStore, Record, RecordDraft, Status};
pub use client::InventoryClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of labinv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
