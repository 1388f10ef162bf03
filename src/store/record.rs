//! Record definitions
//!
//! The equipment record, its draft form, and the status enumeration.
//! Field names are serde-renamed to the Spanish wire shape:
//! `{codigo, nombre, tipo, estado, fecha_registro, ultima_actualizacion?}`.

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

/// Timestamp format used for `fecha_registro` and `ultima_actualizacion`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Status Enumeration
// =============================================================================

/// Equipment status. The fixed enumeration; nothing else is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "disponible")]
    Available,

    #[serde(rename = "en uso")]
    InUse,

    #[serde(rename = "en mantenimiento")]
    UnderMaintenance,

    #[serde(rename = "fuera de servicio")]
    OutOfService,
}

impl Status {
    /// All members of the enumeration, in display order
    pub const ALL: [Status; 4] = [
        Status::Available,
        Status::InUse,
        Status::UnderMaintenance,
        Status::OutOfService,
    ];

    /// Canonical lowercase wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "disponible",
            Status::InUse => "en uso",
            Status::UnderMaintenance => "en mantenimiento",
            Status::OutOfService => "fuera de servicio",
        }
    }

    /// Comma-separated list of allowed values, used in error messages
    pub fn allowed_values() -> &'static str {
        "disponible, en uso, en mantenimiento, fuera de servicio"
    }

    /// Parse a status case-insensitively
    ///
    /// Fails with [`InventoryError::InvalidStatus`] for anything outside the
    /// enumeration.
    pub fn parse(input: &str) -> Result<Status> {
        match input.trim().to_lowercase().as_str() {
            "disponible" => Ok(Status::Available),
            "en uso" => Ok(Status::InUse),
            "en mantenimiento" => Ok(Status::UnderMaintenance),
            "fuera de servicio" => Ok(Status::OutOfService),
            _ => Err(InventoryError::InvalidStatus),
        }
    }
}

impl FromStr for Status {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        Status::parse(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Equipment Record
// =============================================================================

/// One equipment entry, as held in memory and persisted to the inventory file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, stored upper-cased
    #[serde(rename = "codigo")]
    pub code: String,

    /// Free-text label
    #[serde(rename = "nombre")]
    pub name: String,

    /// Free-text category
    #[serde(rename = "tipo")]
    pub kind: String,

    /// Current status, always a member of the enumeration
    #[serde(rename = "estado")]
    pub status: Status,

    /// Set once at registration, immutable thereafter
    #[serde(rename = "fecha_registro")]
    pub registered_at: String,

    /// Stamped on every status change; absent until the first update
    #[serde(
        rename = "ultima_actualizacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_at: Option<String>,
}

impl Record {
    /// Current local time in the record timestamp format
    pub fn now() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

// =============================================================================
// Record Draft
// =============================================================================

/// A candidate record submitted for registration, before validation.
///
/// All fields are raw strings; the status is parsed during validation.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub code: String,
    pub name: String,
    pub kind: String,
    pub status: String,
}
