//! Integration tests for the encrypted database: round-trips,
//! authentication, tamper detection and size bounds.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use passvault::errors::PassVaultError;
use passvault::state::{Entry, State};
use passvault::vault::{change_master_password, load_vault, save_vault, MIN_DB_LEN};

/// Helper: a vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("test.db");
    (dir, path)
}

fn gmail_entry() -> Entry {
    Entry {
        name: "gmail".into(),
        url: "https://gmail.com".into(),
        username: "a@b".into(),
        password: "pw1234".into(),
        description: String::new(),
        updated_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn single_entry_state() -> State {
    let mut state = State::new();
    state.add_entry("default", gmail_entry()).unwrap();
    state
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[test]
fn empty_vault_roundtrip() {
    let (_dir, path) = vault_path();
    let state = State::new();

    save_vault(&path, "hunter2", &state).expect("save");
    let loaded = load_vault(&path, "hunter2").expect("load");

    assert_eq!(loaded, state);
    assert!(loaded.is_empty());
    assert!(fs::metadata(&path).unwrap().len() >= MIN_DB_LEN);
}

#[test]
fn single_entry_roundtrip() {
    let (_dir, path) = vault_path();
    let state = single_entry_state();

    save_vault(&path, "abc", &state).expect("save");
    let loaded = load_vault(&path, "abc").expect("load");

    assert_eq!(loaded, state);
    assert_eq!(loaded.find_entry("default", "gmail"), Some(&gmail_entry()));
}

#[test]
fn entry_order_survives_roundtrip() {
    let (_dir, path) = vault_path();
    let mut state = State::new();
    for name in ["charlie", "alpha", "bravo"] {
        let mut entry = gmail_entry();
        entry.name = name.to_string();
        state.add_entry("work", entry).unwrap();
    }

    save_vault(&path, "pw", &state).expect("save");
    let loaded = load_vault(&path, "pw").expect("load");

    let names: Vec<_> = loaded
        .group("work")
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["charlie", "alpha", "bravo"]);
}

#[test]
fn save_replaces_previous_file() {
    let (_dir, path) = vault_path();

    save_vault(&path, "pw", &single_entry_state()).expect("save 1");
    save_vault(&path, "pw", &State::new()).expect("save 2");

    let loaded = load_vault(&path, "pw").expect("load");
    assert!(loaded.is_empty());
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_is_auth_failure() {
    let (_dir, path) = vault_path();
    save_vault(&path, "abc", &single_entry_state()).expect("save");

    let result = load_vault(&path, "ab");
    assert!(matches!(result, Err(PassVaultError::AuthFailed)));
}

#[test]
fn master_password_change() {
    let (_dir, path) = vault_path();
    let state = single_entry_state();
    save_vault(&path, "old-password", &state).expect("save");

    change_master_password(&path, "old-password", "new-password").expect("change");

    assert!(matches!(
        load_vault(&path, "old-password"),
        Err(PassVaultError::AuthFailed)
    ));
    assert_eq!(load_vault(&path, "new-password").expect("load"), state);
}

// ---------------------------------------------------------------------------
// Tamper detection
// ---------------------------------------------------------------------------

/// Flip one byte at `offset` and expect the load to fail.
fn assert_tamper_rejected(offset: usize) {
    let (_dir, path) = vault_path();
    save_vault(&path, "abc", &single_entry_state()).expect("save");

    let mut data = fs::read(&path).expect("read file");
    assert!(offset < data.len(), "offset {offset} outside file");
    data[offset] ^= 0x01;
    fs::write(&path, &data).expect("write tampered file");

    let result = load_vault(&path, "abc");
    assert!(
        matches!(
            result,
            Err(PassVaultError::AuthFailed) | Err(PassVaultError::CorruptDatabase(_))
        ),
        "tampered byte at offset {offset} was accepted"
    );
}

#[test]
fn tampered_salt_is_rejected() {
    // First and last salt bytes (offsets 4 and 35).
    assert_tamper_rejected(4);
    assert_tamper_rejected(35);
}

#[test]
fn tampered_wrapped_keys_are_rejected() {
    // One byte in each of B1..B4.
    assert_tamper_rejected(36);
    assert_tamper_rejected(68);
    assert_tamper_rejected(100);
    assert_tamper_rejected(132);
}

#[test]
fn tampered_mac_is_rejected() {
    assert_tamper_rejected(164);
    assert_tamper_rejected(227);
}

#[test]
fn tampered_payload_is_rejected() {
    assert_tamper_rejected(228);
    assert_tamper_rejected(240);
}

#[test]
fn truncation_is_rejected() {
    let (_dir, path) = vault_path();
    save_vault(&path, "abc", &single_entry_state()).expect("save");
    let data = fs::read(&path).expect("read file");

    // Truncate in the header, in the MAC, and inside the payload.
    for keep in [100, 210, data.len() - 1] {
        fs::write(&path, &data[..keep]).expect("write truncated file");
        let result = load_vault(&path, "abc");
        assert!(
            matches!(
                result,
                Err(PassVaultError::AuthFailed) | Err(PassVaultError::CorruptDatabase(_))
            ),
            "file truncated to {keep} bytes was accepted"
        );
    }
}

// ---------------------------------------------------------------------------
// Version gate
// ---------------------------------------------------------------------------

#[test]
fn unknown_version_is_corrupt_database() {
    let (_dir, path) = vault_path();
    save_vault(&path, "abc", &single_entry_state()).expect("save");

    let mut data = fs::read(&path).expect("read file");
    data[..4].copy_from_slice(b"GH99");
    fs::write(&path, &data).expect("write file");

    let result = load_vault(&path, "abc");
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

// ---------------------------------------------------------------------------
// Size bounds
// ---------------------------------------------------------------------------

#[test]
fn undersized_file_is_rejected_without_decryption() {
    let (_dir, path) = vault_path();
    fs::write(&path, vec![0u8; 100]).expect("write small file");

    let result = load_vault(&path, "abc");
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn oversized_file_is_rejected_without_decryption() {
    let (_dir, path) = vault_path();
    // 33 MB of zeros: over the read cap, structurally worthless. The
    // reader must bail on the size alone, long before any KDF work.
    fs::write(&path, vec![0u8; 33_000_000]).expect("write big file");

    let result = load_vault(&path, "abc");
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn missing_file_is_io_error_class() {
    let (_dir, path) = vault_path();
    let result = load_vault(&path, "abc");
    assert!(matches!(result, Err(PassVaultError::VaultNotFound(_))));
}

#[test]
fn oversized_state_refused_on_save() {
    let (_dir, path) = vault_path();

    // An entry whose password alone pushes the payload over the 64 MB
    // write cap.
    let mut state = State::new();
    let mut entry = gmail_entry();
    entry.password = "x".repeat(66_000_000);
    state.add_entry("default", entry).unwrap();

    let result = save_vault(&path, "abc", &state);
    assert!(matches!(result, Err(PassVaultError::PayloadTooLarge(_))));
    assert!(!path.exists(), "no file may be left behind");
}

// ---------------------------------------------------------------------------
// Salt uniqueness
// ---------------------------------------------------------------------------

#[test]
fn two_saves_never_produce_the_same_bytes() {
    let (_dir, path) = vault_path();
    let (_dir2, path2) = vault_path();
    let state = single_entry_state();

    save_vault(&path, "abc", &state).expect("save 1");
    save_vault(&path2, "abc", &state).expect("save 2");

    let data1 = fs::read(&path).expect("read 1");
    let data2 = fs::read(&path2).expect("read 2");

    assert_eq!(&data1[..4], b"GH00");
    assert_eq!(&data2[..4], b"GH00");
    assert_ne!(&data1[4..36], &data2[4..36], "salts must differ");
    assert_ne!(&data1[36..164], &data2[36..164], "wrapped keys must differ");
    assert_ne!(&data1[164..228], &data2[164..228], "MACs must differ");
    assert_ne!(&data1[228..], &data2[228..], "payloads must differ");
}
