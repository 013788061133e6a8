use std::fs;

use tempfile::tempdir;

use pms_app_lib::store::{DataStore, DATA_FILE_NAME};

#[test]
fn first_load_seeds_the_slot() {
    let dir = tempdir().expect("tempdir");
    let store = DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store");

    let dataset = store.load().expect("load");
    assert_eq!(dataset.employees.len(), 20);
    assert!(store.path().exists());
}

#[test]
fn repeated_loads_return_the_persisted_snapshot_unchanged() {
    let dir = tempdir().expect("tempdir");
    let store = DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store");

    let first = store.load().expect("first");
    let on_disk_before = fs::read_to_string(store.path()).expect("read");
    let second = store.load().expect("second");
    let on_disk_after = fs::read_to_string(store.path()).expect("read");

    assert_eq!(on_disk_before, on_disk_after);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize"),
    );
}

#[test]
fn reset_writes_a_fresh_slot() {
    let dir = tempdir().expect("tempdir");
    let store = DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store");

    store.load().expect("seed");
    let before = fs::metadata(store.path()).expect("metadata").len();

    let dataset = store.reset().expect("reset");
    assert_eq!(dataset.employees.len(), 20);
    assert!(fs::metadata(store.path()).expect("metadata").len() > 0);
    assert!(before > 0);
}

#[test]
fn corrupted_slot_propagates_instead_of_regenerating() {
    let dir = tempdir().expect("tempdir");
    let store = DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store");

    fs::write(store.path(), "{\"employees\": oops").expect("corrupt");
    assert!(store.load().is_err());
    // The slot content is untouched so the damage can be inspected.
    assert_eq!(
        fs::read_to_string(store.path()).expect("read"),
        "{\"employees\": oops"
    );

    // An explicit reset is the way out.
    assert!(store.reset().is_ok());
    assert!(store.load().is_ok());
}
