//! Persistence Adapter
//!
//! Load and save of the JSON inventory file.
//!
//! ## File Format
//! A single UTF-8 JSON array of record objects:
//! ```json
//! [
//!     {
//!         "codigo": "MM01",
//!         "nombre": "Multímetro Digital",
//!         "tipo": "Instrumento de medición",
//!         "estado": "disponible",
//!         "fecha_registro": "2026-08-23 10:15:00"
//!     }
//! ]
//! ```
//! The file is rewritten in full on every mutation: no incremental append,
//! no write-ahead log. Full rewrite keeps the format trivially loadable and
//! avoids corruption from partial appends, at O(total records) work per
//! mutation.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::store::Record;

/// Load the record collection from the inventory file
///
/// Invoked once at store construction. Fails soft: a missing file starts an
/// empty inventory, and any read or parse error is logged and likewise
/// degrades to an empty collection. Never propagates an error to the caller.
pub fn load(path: &Path) -> Vec<Record> {
    if !path.exists() {
        tracing::info!("Archivo de inventario no existe. Iniciando con inventario vacío.");
        return Vec::new();
    }

    match read_records(path) {
        Ok(records) => {
            tracing::info!("Inventario cargado: {} equipos", records.len());
            records
        }
        Err(e) => {
            tracing::error!("Error al cargar inventario: {}", e);
            Vec::new()
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}

/// Overwrite the inventory file with the full record collection
///
/// Called synchronously inside the store's lock after every successful
/// mutation. The caller decides how to handle a failure; the store logs it
/// and keeps the in-memory state.
pub fn save(path: &Path, records: &[Record]) -> Result<()> {
    let contents = serde_json::to_string_pretty(records)?;
    fs::write(path, contents)?;
    tracing::debug!("Inventario guardado: {} equipos", records.len());
    Ok(())
}
