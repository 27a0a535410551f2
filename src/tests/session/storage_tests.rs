use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let s = MemoryStorage::new();
    assert_eq!(s.get("k"), None);
    s.set("k", "v").unwrap();
    assert_eq!(s.get("k").as_deref(), Some("v"));
    s.remove("k").unwrap();
    assert_eq!(s.get("k"), None);
    s.remove("k").unwrap();
}

#[test]
fn file_storage_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let a = FileStorage::new(&path);
    a.set("ams_token", "abc").unwrap();
    a.set("ams_role", "ADMIN").unwrap();

    let b = FileStorage::new(&path);
    assert_eq!(b.get("ams_token").as_deref(), Some("abc"));
    b.remove("ams_role").unwrap();
    assert_eq!(a.get("ams_role"), None);
    assert_eq!(a.get("ams_token").as_deref(), Some("abc"));
}

#[test]
fn file_storage_missing_file_reads_empty_and_remove_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let s = FileStorage::new(dir.path().join("session.json"));
    assert_eq!(s.get("ams_token"), None);
    s.remove("ams_token").unwrap();
    assert!(!s.path().exists());
}

#[test]
fn corrupt_file_reads_empty_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let s = FileStorage::new(&path);
    assert_eq!(s.get("ams_token"), None);
    s.set("ams_token", "fresh").unwrap();
    assert_eq!(s.get("ams_token").as_deref(), Some("fresh"));
}
