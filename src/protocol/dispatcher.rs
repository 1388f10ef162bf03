//! Protocol dispatcher
//!
//! State-free routing from one decoded request to a store operation.

use crate::error::InventoryError;
use crate::store::InventoryStore;
use super::{Request, Response};

/// Process one raw client message against the store
///
/// Every path, including decode failure, produces a well-formed envelope;
/// nothing raises past this boundary.
pub fn dispatch(store: &InventoryStore, raw: &str) -> Response {
    let request = match Request::decode(raw) {
        Ok(req) => req,
        Err(e) => return e.into(),
    };

    match request.action().as_str() {
        "registrar" => register(store, &request),
        "consultar" => list(store),
        "buscar" => find(store, &request),
        "actualizar" => update(store, &request),
        other => InventoryError::UnknownAction(other.to_string()).into(),
    }
}

fn register(store: &InventoryStore, request: &Request) -> Response {
    match store.register(request.to_draft()) {
        Ok(record) => Response::ok_with_record("Equipo registrado correctamente", record),
        Err(e) => e.into(),
    }
}

fn list(store: &InventoryStore) -> Response {
    let records = store.list();
    Response::ok_with_records(format!("Total de equipos: {}", records.len()), records)
}

fn find(store: &InventoryStore, request: &Request) -> Response {
    let Some(code) = request.code() else {
        return InventoryError::MissingField("codigo").into();
    };

    match store.find(code) {
        Ok(record) => Response::ok_with_record("Equipo encontrado", record),
        Err(e) => e.into(),
    }
}

fn update(store: &InventoryStore, request: &Request) -> Response {
    let Some(code) = request.code() else {
        return InventoryError::MissingField("codigo").into();
    };
    let Some(status) = request.status() else {
        return InventoryError::MissingField("estado").into();
    };

    match store.update_status(code, status) {
        Ok((record, previous)) => {
            let message = format!(
                "Estado actualizado de '{}' a '{}'",
                previous, record.status
            );
            Response::ok_with_record(message, record)
        }
        Err(e) => e.into(),
    }
}
