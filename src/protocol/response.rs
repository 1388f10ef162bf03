//! Response definitions
//!
//! The uniform response envelope sent back for every request.

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::store::Record;

/// Result discriminator of a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error,
}

/// The uniform response envelope
///
/// Every request, successful or not, is answered with this shape; clients
/// distinguish outcomes solely via `resultado` and print `mensaje`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "resultado")]
    pub outcome: Outcome,

    #[serde(rename = "mensaje")]
    pub message: String,

    /// Single record payload (registrar, buscar, actualizar)
    #[serde(rename = "equipo", default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,

    /// Record set payload (consultar)
    #[serde(rename = "equipos", default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
}

impl Response {
    /// Success envelope with no payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Ok,
            message: message.into(),
            record: None,
            records: None,
        }
    }

    /// Success envelope carrying one record
    pub fn ok_with_record(message: impl Into<String>, record: Record) -> Self {
        Self {
            record: Some(record),
            ..Self::ok(message)
        }
    }

    /// Success envelope carrying the record set
    pub fn ok_with_records(message: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
            ..Self::ok(message)
        }
    }

    /// Error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error,
            message: message.into(),
            record: None,
            records: None,
        }
    }

    /// Whether this is a success envelope
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }
}

impl From<InventoryError> for Response {
    /// Map an error to its envelope
    ///
    /// Domain errors carry their display message verbatim; internal I/O or
    /// serialization failures are reported generically.
    fn from(err: InventoryError) -> Self {
        if err.is_domain() {
            Response::error(err.to_string())
        } else {
            Response::error(format!("Error interno: {}", err))
        }
    }
}
