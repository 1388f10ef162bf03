//! InventoryStore implementation
//!
//! Vec-backed record collection behind a single exclusive lock.

use std::path::PathBuf;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::persistence;
use super::{Record, RecordDraft, Status};

/// The authoritative in-memory record store
///
/// ## Concurrency Model: Single Exclusive Lock
///
/// Every operation that reads or writes the collection holds `records` for the
/// duration of the call, so operations never interleave and a caller always
/// observes a complete prior write. Persistence happens inside the lock as a
/// synchronous side effect of each successful mutation; a save failure is
/// logged and the in-memory state kept, so memory and disk may diverge until
/// the next successful save.
pub struct InventoryStore {
    /// Backing file, rewritten in full on every mutation
    data_file: PathBuf,

    /// Ordered record collection, insertion order preserved
    records: Mutex<Vec<Record>>,
}

impl InventoryStore {
    /// Open a store against the configured data file
    ///
    /// Loads the existing inventory if the file is present; a missing,
    /// unreadable, or unparseable file degrades to an empty collection.
    pub fn open(config: &Config) -> Self {
        let records = persistence::load(&config.data_file);
        Self {
            data_file: config.data_file.clone(),
            records: Mutex::new(records),
        }
    }

    /// Validate a candidate record
    ///
    /// Pure check, no lock taken. Fails with `MissingField` if any required
    /// field is empty, `InvalidStatus` if the status is not in the
    /// enumeration. Returns the parsed status on success.
    pub fn validate(draft: &RecordDraft) -> Result<Status> {
        let required: [(&'static str, &str); 4] = [
            ("codigo", &draft.code),
            ("nombre", &draft.name),
            ("tipo", &draft.kind),
            ("estado", &draft.status),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InventoryError::MissingField(field));
            }
        }

        Status::parse(&draft.status)
    }

    /// Register a new equipment record
    ///
    /// The code is stored upper-cased and must be unique under
    /// case-insensitive comparison; the status is stored canonical lowercase.
    /// Returns the created record.
    pub fn register(&self, draft: RecordDraft) -> Result<Record> {
        let status = Self::validate(&draft)?;
        let code = draft.code.trim().to_uppercase();

        let mut records = self.records.lock();

        if records.iter().any(|r| r.code.to_uppercase() == code) {
            return Err(InventoryError::DuplicateCode);
        }

        let record = Record {
            code,
            name: draft.name,
            kind: draft.kind,
            status,
            registered_at: Record::now(),
            last_updated_at: None,
        };
        records.push(record.clone());
        self.save(&records);

        tracing::info!("Equipo registrado: {}", record.code);
        Ok(record)
    }

    /// Snapshot copy of the full collection
    ///
    /// The copy keeps callers from observing or inducing concurrent mutation.
    pub fn list(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Find a record by code, case-insensitively
    ///
    /// Linear scan; first match in insertion order wins.
    pub fn find(&self, code: &str) -> Result<Record> {
        let code = code.to_uppercase();
        self.records
            .lock()
            .iter()
            .find(|r| r.code.to_uppercase() == code)
            .cloned()
            .ok_or(InventoryError::NotFound)
    }

    /// Change the status of an existing record
    ///
    /// The new status is validated before the lock is taken. Stamps
    /// `last_updated_at` and persists. Returns the updated record together
    /// with the prior status, for reporting.
    pub fn update_status(&self, code: &str, new_status: &str) -> Result<(Record, Status)> {
        let status = Status::parse(new_status)?;
        let code = code.to_uppercase();

        let mut records = self.records.lock();

        let record = records
            .iter_mut()
            .find(|r| r.code.to_uppercase() == code)
            .ok_or(InventoryError::NotFound)?;

        let previous = record.status;
        record.status = status;
        record.last_updated_at = Some(Record::now());
        let updated = record.clone();
        self.save(&records);

        tracing::info!(
            "Estado actualizado para {}: {} -> {}",
            updated.code,
            previous,
            status
        );
        Ok((updated, previous))
    }

    /// Number of records currently in the store
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Persist the collection, called with the lock held
    ///
    /// Soft-fails: a save error is logged and the in-memory mutation kept.
    fn save(&self, records: &[Record]) {
        if let Err(e) = persistence::save(&self.data_file, records) {
            tracing::error!("Error al guardar inventario: {}", e);
        }
    }
}
