//! Request definitions
//!
//! The decoded shape of one client message.

use serde::Deserialize;

use crate::error::{InventoryError, Result};
use crate::store::RecordDraft;

/// A decoded client request
///
/// Every field is optional at the decode layer; the dispatcher enforces
/// which fields each action requires. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    /// Requested action name, matched case-insensitively
    pub accion: Option<String>,

    pub codigo: Option<String>,
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub estado: Option<String>,
}

impl Request {
    /// Decode one raw message
    ///
    /// Fails with `MalformedRequest` if the payload is not a JSON object of
    /// the expected shape.
    pub fn decode(raw: &str) -> Result<Request> {
        serde_json::from_str(raw.trim()).map_err(|_| InventoryError::MalformedRequest)
    }

    /// Requested action, normalized to lowercase; empty if absent
    pub fn action(&self) -> String {
        self.accion.as_deref().unwrap_or("").trim().to_lowercase()
    }

    /// View the payload as a registration candidate
    ///
    /// Absent fields become empty strings, which validation rejects as
    /// missing.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            code: self.codigo.clone().unwrap_or_default(),
            name: self.nombre.clone().unwrap_or_default(),
            kind: self.tipo.clone().unwrap_or_default(),
            status: self.estado.clone().unwrap_or_default(),
        }
    }

    /// Non-empty `codigo`, if provided
    pub fn code(&self) -> Option<&str> {
        self.codigo.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Non-empty `estado`, if provided
    pub fn status(&self) -> Option<&str> {
        self.estado.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
