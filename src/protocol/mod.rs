//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (newline-delimited JSON)
//!
//! Each request and each response is one JSON document followed by `\n`.
//!
//! ### Request
//! ```json
//! {"accion": "registrar", "codigo": "MM01", "nombre": "Multímetro",
//!  "tipo": "Instrumento", "estado": "disponible"}
//! ```
//!
//! ### Actions
//! - `registrar`  - requires `codigo`, `nombre`, `tipo`, `estado`
//! - `consultar`  - no fields; returns the full inventory
//! - `buscar`     - requires `codigo`
//! - `actualizar` - requires `codigo`, `estado`
//!
//! ### Response Envelope
//! ```json
//! {"resultado": "ok", "mensaje": "Equipo registrado correctamente",
//!  "equipo": { ... }}
//! ```
//! `resultado` is `"ok"` or `"error"`; `equipo` carries a single record,
//! `equipos` a record array; both are omitted when absent.

mod request;
mod response;
mod dispatcher;

pub use request::Request;
pub use response::{Outcome, Response};
pub use dispatcher::dispatch;
