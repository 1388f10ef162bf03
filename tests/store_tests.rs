//! Tests for InventoryStore
//!
//! These tests verify:
//! - Candidate validation (missing fields, invalid status)
//! - Registration with code/status normalization
//! - Case-insensitive uniqueness and lookup
//! - Status updates and timestamp stamping
//! - Persistence round-trips and load soft-failure

use std::fs;
use std::path::PathBuf;

use labinv::{Config, InventoryError, InventoryStore, RecordDraft, Status};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, InventoryStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

fn open_store(temp_dir: &TempDir) -> InventoryStore {
    let config = Config::builder()
        .data_file(data_file(temp_dir))
        .build();
    InventoryStore::open(&config)
}

fn data_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("inventario.json")
}

fn draft(code: &str, status: &str) -> RecordDraft {
    RecordDraft {
        code: code.to_string(),
        name: "Multímetro Digital".to_string(),
        kind: "Instrumento de medición".to_string(),
        status: status.to_string(),
    }
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_accepts_valid_draft() {
    let status = InventoryStore::validate(&draft("MM01", "disponible")).unwrap();
    assert_eq!(status, Status::Available);
}

#[test]
fn test_validate_rejects_empty_code() {
    let err = InventoryStore::validate(&draft("", "disponible")).unwrap_err();
    assert!(matches!(err, InventoryError::MissingField("codigo")));
}

#[test]
fn test_validate_rejects_missing_name() {
    let mut candidate = draft("MM01", "disponible");
    candidate.name = String::new();

    let err = InventoryStore::validate(&candidate).unwrap_err();
    assert!(matches!(err, InventoryError::MissingField("nombre")));
}

#[test]
fn test_validate_rejects_unknown_status() {
    let err = InventoryStore::validate(&draft("MM01", "estado_invalido")).unwrap_err();
    assert!(matches!(err, InventoryError::InvalidStatus));
}

#[test]
fn test_status_parse_is_case_insensitive() {
    assert_eq!(Status::parse("Disponible").unwrap(), Status::Available);
    assert_eq!(Status::parse("EN USO").unwrap(), Status::InUse);
    assert_eq!(
        Status::parse("Fuera De Servicio").unwrap(),
        Status::OutOfService
    );
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn test_register_normalizes_code_and_status() {
    let (_tmp, store) = setup_temp_store();

    let record = store.register(draft("mm01", "DISPONIBLE")).unwrap();

    assert_eq!(record.code, "MM01");
    assert_eq!(record.status, Status::Available);
    assert!(record.last_updated_at.is_none());
    assert!(!record.registered_at.is_empty());
}

#[test]
fn test_register_then_find_returns_record() {
    let (_tmp, store) = setup_temp_store();

    store.register(draft("osc01", "en uso")).unwrap();
    let found = store.find("OSC01").unwrap();

    assert_eq!(found.code, "OSC01");
    assert_eq!(found.status, Status::InUse);
}

#[test]
fn test_register_duplicate_code_fails_any_casing() {
    let (_tmp, store) = setup_temp_store();

    store.register(draft("PC01", "disponible")).unwrap();
    let err = store.register(draft("pc01", "en uso")).unwrap_err();

    assert!(matches!(err, InventoryError::DuplicateCode));
    // The failed attempt leaves the collection unchanged
    assert_eq!(store.len(), 1);
}

#[test]
fn test_register_invalid_draft_leaves_store_empty() {
    let (_tmp, store) = setup_temp_store();

    assert!(store.register(draft("PC01", "roto")).is_err());
    assert!(store.is_empty());
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_find_is_case_insensitive() {
    let (_tmp, store) = setup_temp_store();

    let registered = store.register(draft("PC01", "disponible")).unwrap();
    let found = store.find("pc01").unwrap();

    assert_eq!(found, registered);
}

#[test]
fn test_find_unknown_code_fails() {
    let (_tmp, store) = setup_temp_store();

    let err = store.find("NOPE").unwrap_err();
    assert!(matches!(err, InventoryError::NotFound));
}

#[test]
fn test_list_returns_snapshot_in_insertion_order() {
    let (_tmp, store) = setup_temp_store();

    store.register(draft("B02", "disponible")).unwrap();
    store.register(draft("A01", "en uso")).unwrap();

    let records = store.list();
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["B02", "A01"]);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_status_stamps_and_reports_previous() {
    let (_tmp, store) = setup_temp_store();

    store.register(draft("MM01", "disponible")).unwrap();
    let (updated, previous) = store.update_status("mm01", "En Mantenimiento").unwrap();

    assert_eq!(previous, Status::Available);
    assert_eq!(updated.status, Status::UnderMaintenance);
    assert!(updated.last_updated_at.is_some());
}

#[test]
fn test_update_status_rejects_invalid_value() {
    let (_tmp, store) = setup_temp_store();

    store.register(draft("MM01", "disponible")).unwrap();
    let err = store.update_status("MM01", "prestado").unwrap_err();

    assert!(matches!(err, InventoryError::InvalidStatus));
    // Record untouched by the failed update
    let record = store.find("MM01").unwrap();
    assert_eq!(record.status, Status::Available);
    assert!(record.last_updated_at.is_none());
}

#[test]
fn test_update_status_unknown_code_fails() {
    let (_tmp, store) = setup_temp_store();

    let err = store.update_status("NOPE", "disponible").unwrap_err();
    assert!(matches!(err, InventoryError::NotFound));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_persistence_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    let first = open_store(&temp_dir);
    first.register(draft("MM01", "disponible")).unwrap();
    first.register(draft("OSC01", "en uso")).unwrap();

    // A second store against the same file adopts the saved collection
    let second = open_store(&temp_dir);
    assert_eq!(second.list(), first.list());
}

#[test]
fn test_missing_file_starts_empty() {
    let (_tmp, store) = setup_temp_store();
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_file_degrades_to_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(data_file(&temp_dir), "esto no es json").unwrap();

    let store = open_store(&temp_dir);
    assert!(store.is_empty());
}

#[test]
fn test_saved_file_omits_absent_update_timestamp() {
    let temp_dir = TempDir::new().unwrap();

    let store = open_store(&temp_dir);
    store.register(draft("MM01", "disponible")).unwrap();

    let contents = fs::read_to_string(data_file(&temp_dir)).unwrap();
    assert!(contents.contains("\"fecha_registro\""));
    assert!(!contents.contains("ultima_actualizacion"));

    store.update_status("MM01", "en uso").unwrap();
    let contents = fs::read_to_string(data_file(&temp_dir)).unwrap();
    assert!(contents.contains("ultima_actualizacion"));
}
