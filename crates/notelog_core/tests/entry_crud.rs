use notelog_core::db::open_db_in_memory;
use notelog_core::store::EntryStore;
use notelog_core::{EntryRepository, RepoError, SqliteEntryRepository, StoreError};

#[test]
fn create_assigns_id_and_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let created = repo.create_entry("first note", 3).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.text, "first note");
    assert_eq!(created.color, 3);
    assert!(created.created > 0);
    assert_eq!(created.created, created.modified);
}

#[test]
fn ids_are_monotonic_and_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let first = repo.create_entry("one", 0).unwrap();
    let second = repo.create_entry("two", 0).unwrap();
    assert!(second.id > first.id);

    repo.delete_entry(second.id).unwrap();
    let third = repo.create_entry("three", 0).unwrap();
    assert!(third.id > second.id);
}

#[test]
fn update_replaces_text_and_color_and_preserves_created() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let created = repo.create_entry("draft", 1).unwrap();
    repo.update_entry(created.id, "final", 5).unwrap();

    let loaded = repo.get_entry(created.id).unwrap().unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.text, "final");
    assert_eq!(loaded.color, 5);
    assert_eq!(loaded.created, created.created);
    assert!(loaded.modified >= created.modified);
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let err = repo.update_entry(42, "ghost", 0).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn delete_removes_entry_and_rejects_second_attempt() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let created = repo.create_entry("to delete", 0).unwrap();
    repo.delete_entry(created.id).unwrap();

    assert!(repo.get_entry(created.id).unwrap().is_none());
    let err = repo.delete_entry(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
}

#[test]
fn list_orders_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let older = repo.create_entry("older", 0).unwrap();
    let newer = repo.create_entry("newer", 0).unwrap();

    conn.execute("UPDATE entries SET created = 1000 WHERE id = ?1;", [older.id])
        .unwrap();
    conn.execute("UPDATE entries SET created = 2000 WHERE id = ?1;", [newer.id])
        .unwrap();

    let listed = repo.list_entries().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, older.id);
}

#[test]
fn list_breaks_created_ties_by_id_descending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::new(&conn);

    let first = repo.create_entry("a", 0).unwrap();
    let second = repo.create_entry("b", 0).unwrap();

    conn.execute("UPDATE entries SET created = 1000;", []).unwrap();

    let listed = repo.list_entries().unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn store_mutations_answer_with_refreshed_snapshot() {
    let store = EntryStore::open("memory", "").unwrap();

    let after_create = store.entry_create("Buy milk", 2).unwrap();
    assert_eq!(after_create.len(), 1);
    let id = after_create[0].id;

    let after_update = store.entry_update(id, "Buy milk and eggs", 2).unwrap();
    assert_eq!(after_update.len(), 1);
    assert_eq!(after_update[0].text, "Buy milk and eggs");

    let after_delete = store.entry_delete(id).unwrap();
    assert!(after_delete.is_empty());
}

#[test]
fn store_rejects_unsupported_kind() {
    let err = EntryStore::open("cloud", "notes.db").unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
    assert_eq!(err.code(), "InvalidArgument");
}

#[test]
fn store_rejects_production_kind_without_path() {
    let err = EntryStore::open("production", "  ").unwrap_err();
    assert_eq!(err.code(), "InvalidArgument");
}

#[test]
fn store_kind_parsing_is_case_insensitive() {
    let store = EntryStore::open("  MEMORY ", "ignored").unwrap();
    assert!(store.current().unwrap().is_empty());
}

#[test]
fn production_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");
    let path_str = path.to_str().unwrap();

    {
        let store = EntryStore::open("production", path_str).unwrap();
        store.entry_create("persisted", 7).unwrap();
    }

    let reopened = EntryStore::open("production", path_str).unwrap();
    let entries = reopened.current().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "persisted");
    assert_eq!(entries[0].color, 7);
}

#[test]
fn store_not_found_error_maps_to_taxonomy_code() {
    let store = EntryStore::open("memory", "").unwrap();

    let err = store.entry_delete(123).unwrap_err();
    assert_eq!(err.code(), "NotFound");

    let err = store.entry_update(123, "x", 0).unwrap_err();
    assert_eq!(err.code(), "NotFound");
}
