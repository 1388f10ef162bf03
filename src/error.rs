//! Error types for labinv
//!
//! Provides a unified error type for all operations. Display messages for the
//! domain variants are the client-facing Spanish strings carried verbatim in
//! the `mensaje` field of an error envelope.

use thiserror::Error;

use crate::store::Status;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for labinv operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Campo '{0}' es requerido")]
    MissingField(&'static str),

    #[error("Estado inválido. Debe ser uno de: {}", Status::allowed_values())]
    InvalidStatus,

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("El código ya existe en el inventario")]
    DuplicateCode,

    #[error("Equipo no encontrado")]
    NotFound,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Mensaje JSON inválido")]
    MalformedRequest,

    #[error("Acción '{0}' no reconocida")]
    UnknownAction(String),

    // -------------------------------------------------------------------------
    // I/O and Serialization Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InventoryError {
    /// Whether this error is a domain error whose message is meant for the
    /// client, as opposed to an internal I/O or serialization failure.
    pub fn is_domain(&self) -> bool {
        !matches!(self, InventoryError::Io(_) | InventoryError::Json(_))
    }
}
