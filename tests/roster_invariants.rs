//! Roster Invariant Tests
//!
//! Tests for the record store and validation boundary contracts:
//! - Validation occurs before any store mutation
//! - Failed validation leaves the store unchanged
//! - Server-assigned ids are unique and retrievable
//! - Update preserves the original id
//! - Delete is terminal for an id

use rosterd::roster::{validator, RosterError, RosterStore, StudentDraft};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(name: &str, age: u32, email: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        age,
        email: email.to_string(),
    }
}

/// The create operation as the handler performs it: validate, then insert.
fn create(store: &RosterStore, draft: StudentDraft) -> Result<rosterd::roster::Student, RosterError> {
    validator::validate(&draft)?;
    store.insert(draft)
}

// =============================================================================
// Create Tests
// =============================================================================

/// A valid create returns a non-empty, previously unused id under which
/// the record can be retrieved.
#[test]
fn test_create_returns_fresh_retrievable_id() {
    let store = RosterStore::with_seed_data();
    let existing: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    let created = create(&store, draft("Dana Lee", 30, "dana.lee@example.com")).unwrap();

    assert!(!created.id.is_empty());
    assert!(!existing.contains(&created.id));
    assert_eq!(store.get(&created.id).unwrap(), created);
}

/// Round trip: create(X) then get(id) returns X's fields.
#[test]
fn test_create_round_trip_preserves_fields() {
    let store = RosterStore::new();
    let created = create(&store, draft("Dana Lee", 30, "dana.lee@example.com")).unwrap();

    let fetched = store.get(&created.id).unwrap();
    assert_eq!(fetched.name, "Dana Lee");
    assert_eq!(fetched.age, 30);
    assert_eq!(fetched.email, "dana.lee@example.com");
}

/// Seed scenario: three seed students plus one POST makes four records.
#[test]
fn test_seeded_store_grows_to_four_on_create() {
    let store = RosterStore::with_seed_data();
    assert_eq!(store.len().unwrap(), 3);

    let created = create(&store, draft("Dana Lee", 30, "dana.lee@example.com")).unwrap();
    assert_eq!(created.name, "Dana Lee");
    assert_eq!(created.age, 30);
    assert_eq!(created.email, "dana.lee@example.com");

    assert_eq!(store.list_all().unwrap().len(), 4);
}

// =============================================================================
// Validation Boundary Tests
// =============================================================================

/// Invalid payloads fail before any mutation; the store is unchanged.
#[test]
fn test_failed_validation_leaves_store_unchanged() {
    let store = RosterStore::with_seed_data();
    let before = store.len().unwrap();

    let invalid_drafts = [
        draft("", 21, "a@b.c"),
        draft(&"x".repeat(51), 21, "a@b.c"),
        draft("Eve", 150, "a@b.c"),
        draft("Eve", 21, "not-an-email"),
    ];

    for invalid in invalid_drafts {
        let result = create(&store, invalid);
        assert!(matches!(result, Err(RosterError::Validation(_))));
        assert_eq!(store.len().unwrap(), before);
    }
}

/// Age 150 is rejected with a violation naming the age field.
#[test]
fn test_age_150_rejected_with_field_detail() {
    let store = RosterStore::with_seed_data();

    let err = create(&store, draft("Eve", 150, "eve@example.com")).unwrap_err();
    match err {
        RosterError::Validation(violations) => {
            assert!(violations.iter().any(|v| v.field == "age"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.len().unwrap(), 3);
}

/// Update payloads pass through the same boundary as create payloads.
#[test]
fn test_update_with_invalid_fields_is_rejected_atomically() {
    let store = RosterStore::new();
    let created = create(&store, draft("Bob", 19, "bob@example.com")).unwrap();

    let invalid = draft("", 200, "broken");
    let result = validator::validate(&invalid);
    assert!(result.is_err());

    // The stored record is untouched.
    assert_eq!(store.get(&created.id).unwrap(), created);
}

// =============================================================================
// Read Tests
// =============================================================================

/// get is idempotent with no intervening mutation.
#[test]
fn test_get_twice_returns_identical_records() {
    let store = RosterStore::with_seed_data();
    let id = store.list_all().unwrap()[0].id.clone();

    assert_eq!(store.get(&id).unwrap(), store.get(&id).unwrap());
}

/// list_all returns every stored record exactly once.
#[test]
fn test_list_all_is_a_complete_snapshot() {
    let store = RosterStore::with_seed_data();
    let snapshot = store.list_all().unwrap();

    assert_eq!(snapshot.len(), 3);
    let mut ids: Vec<&str> = snapshot.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

// =============================================================================
// Update Tests
// =============================================================================

/// replace(id, Y) stores Y's fields under the original id.
#[test]
fn test_update_preserves_original_id() {
    let store = RosterStore::new();
    let created = create(&store, draft("Bob Smith", 19, "bob.smith@example.com")).unwrap();

    let replacement = draft("Robert Smith", 20, "robert.smith@example.com");
    validator::validate(&replacement).unwrap();
    let updated = store.replace(&created.id, replacement).unwrap();

    assert_eq!(updated.id, created.id);

    let fetched = store.get(&created.id).unwrap();
    assert_eq!(fetched.name, "Robert Smith");
    assert_eq!(fetched.age, 20);
    assert_eq!(fetched.email, "robert.smith@example.com");
}

/// Updating an unknown id fails with NotFound and inserts nothing.
#[test]
fn test_update_unknown_id_is_not_found() {
    let store = RosterStore::with_seed_data();

    let result = store.replace("no-such-id", draft("Valid Name", 30, "valid@example.com"));
    assert!(matches!(result, Err(RosterError::NotFound)));
    assert_eq!(store.len().unwrap(), 3);
}

// =============================================================================
// Delete Tests
// =============================================================================

/// Delete then get fails; delete then list_all excludes the id.
#[test]
fn test_delete_is_terminal_for_id() {
    let store = RosterStore::with_seed_data();
    let id = store.list_all().unwrap()[0].id.clone();

    store.delete(&id).unwrap();

    assert!(matches!(store.get(&id), Err(RosterError::NotFound)));
    assert!(store.list_all().unwrap().iter().all(|s| s.id != id));
    assert_eq!(store.len().unwrap(), 2);
}

/// Deleting an unknown id fails with NotFound.
#[test]
fn test_delete_unknown_id_is_not_found() {
    let store = RosterStore::new();
    assert!(matches!(store.delete("missing"), Err(RosterError::NotFound)));
}

// =============================================================================
// Summary Tests
// =============================================================================

/// The summary sentence embeds name, age, and email verbatim in the
/// fixed template.
#[test]
fn test_summary_sentence_for_alice() {
    let store = RosterStore::with_seed_data();
    let alice = store
        .list_all()
        .unwrap()
        .into_iter()
        .find(|s| s.name == "Alice Johnson")
        .unwrap();

    assert_eq!(
        alice.summary(),
        "Student Alice Johnson, aged 21, has email alice.johnson@example.com."
    );
}
