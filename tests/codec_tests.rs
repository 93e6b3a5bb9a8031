//! Integration tests for the state codec.

use chrono::{TimeZone, Utc};
use passvault::errors::PassVaultError;
use passvault::state::{decode_state, encode_state, Entry, State};

fn entry(name: &str, password: &str) -> Entry {
    Entry {
        name: name.to_string(),
        url: String::new(),
        username: "user".to_string(),
        password: password.to_string(),
        description: String::new(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 12).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[test]
fn empty_state_roundtrips() {
    let state = State::new();

    let bytes = encode_state(&state).expect("encode");
    let decoded = decode_state(&bytes).expect("decode");

    assert_eq!(decoded, state);
    assert!(decoded.is_empty());
}

#[test]
fn multi_group_state_roundtrips_with_entry_order() {
    let mut state = State::new();
    // Deliberately non-alphabetical insertion order within the group.
    for name in ["zulu", "alpha", "mike"] {
        state.add_entry("work", entry(name, "pw1234")).unwrap();
    }
    state.add_entry("default", entry("gmail", "hunter2")).unwrap();

    let bytes = encode_state(&state).expect("encode");
    let decoded = decode_state(&bytes).expect("decode");

    assert_eq!(decoded, state);

    // Entry order within the group is insertion order, not name order.
    let names: Vec<_> = decoded
        .group("work")
        .unwrap()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["zulu", "alpha", "mike"]);
}

#[test]
fn timestamps_keep_full_resolution() {
    let mut state = State::new();
    let mut e = entry("gmail", "pw1234");
    e.updated_at = Utc.timestamp_opt(1_577_836_800, 123_456_789).unwrap();
    state.add_entry("default", e).unwrap();

    let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
    let restored = decoded.find_entry("default", "gmail").unwrap();
    assert_eq!(
        restored.updated_at,
        Utc.timestamp_opt(1_577_836_800, 123_456_789).unwrap()
    );
}

#[test]
fn all_entry_fields_survive() {
    let mut state = State::new();
    let e = Entry {
        name: "gmail".into(),
        url: "https://gmail.com".into(),
        username: "a@b".into(),
        password: "pw1234".into(),
        description: "personal mail".into(),
        updated_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    };
    state.add_entry("default", e.clone()).unwrap();

    let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
    assert_eq!(decoded.find_entry("default", "gmail"), Some(&e));
}

// ---------------------------------------------------------------------------
// Decode rejections
// ---------------------------------------------------------------------------

#[test]
fn truncated_input_is_rejected() {
    let mut state = State::new();
    state.add_entry("default", entry("gmail", "pw1234")).unwrap();
    let bytes = encode_state(&state).unwrap();

    let result = decode_state(&bytes[..bytes.len() - 3]);
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn duplicate_group_names_are_rejected() {
    let json = br#"[
        {"name": "work", "entries": []},
        {"name": "work", "entries": []}
    ]"#;

    let result = decode_state(json);
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn duplicate_entry_names_in_group_are_rejected() {
    let json = br#"[{"name": "work", "entries": [
        {"name": "jira", "url": "", "username": "u", "password": "pw1234",
         "description": "", "updated_at": "2024-05-17T08:30:12Z"},
        {"name": "jira", "url": "", "username": "u", "password": "pw5678",
         "description": "", "updated_at": "2024-05-17T08:30:12Z"}
    ]}]"#;

    let result = decode_state(json);
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn empty_group_name_is_rejected() {
    let json = br#"[{"name": "", "entries": []}]"#;

    let result = decode_state(json);
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}

#[test]
fn garbage_bytes_are_rejected() {
    let result = decode_state(b"\x00\x01\x02 not json at all");
    assert!(matches!(result, Err(PassVaultError::CorruptDatabase(_))));
}
