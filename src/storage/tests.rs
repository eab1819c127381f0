use super::*;
use crate::data::Specialty;
use tokio_test::{assert_err, assert_ok};

fn subjects() -> Vec<Specialty> {
    vec![
        Specialty::new("1", "Mathematics"),
        Specialty::new("2", "Physics"),
        Specialty::new("3", "Accounting"),
    ]
}

#[test]
fn object_round_trips_through_memory_store() {
    let prefs = Preferences::in_memory();
    assert_eq!(assert_ok!(prefs.get_object::<Specialty>(SUBJECT_SELECT)), None);

    let choice = Specialty::new("2", "Physics");
    assert_ok!(prefs.put_object(SUBJECT_SELECT, Some(&choice)));
    assert_eq!(
        assert_ok!(prefs.get_object::<Specialty>(SUBJECT_SELECT)),
        Some(choice)
    );
}

#[test]
fn storing_none_reads_back_absent() {
    let prefs = Preferences::in_memory();
    assert_ok!(prefs.put_object(SUBJECT_SELECT, Some(&Specialty::new("9", "Law"))));
    assert_ok!(prefs.put_object::<Specialty>(SUBJECT_SELECT, None));
    assert_eq!(assert_ok!(prefs.get_object::<Specialty>(SUBJECT_SELECT)), None);
}

#[test]
fn list_keeps_order() {
    let prefs = Preferences::in_memory();
    assert_ok!(prefs.put_list(SUBJECT_LIST, &subjects()));
    assert_eq!(
        assert_ok!(prefs.get_list::<Specialty>(SUBJECT_LIST)),
        Some(subjects())
    );

    assert_ok!(prefs.remove(SUBJECT_LIST));
    assert_eq!(assert_ok!(prefs.get_list::<Specialty>(SUBJECT_LIST)), None);
}

#[test]
fn corrupt_value_is_an_error() {
    let store = Arc::new(MemoryStore::new());
    assert_ok!(store.put_raw(SUBJECT_LIST, "{not json".to_string()));
    let prefs = Preferences::new(store);
    assert_err!(prefs.get_list::<Specialty>(SUBJECT_LIST));
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    {
        let prefs = Preferences::new(Arc::new(FileStore::open(&path).unwrap()));
        assert_ok!(prefs.put_list(SUBJECT_LIST, &subjects()));
        assert_ok!(prefs.put_object(SUBJECT_SELECT, Some(&Specialty::new("3", "Accounting"))));
    }

    let reopened = Preferences::new(Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(
        assert_ok!(reopened.get_list::<Specialty>(SUBJECT_LIST)),
        Some(subjects())
    );
    assert_eq!(
        assert_ok!(reopened.get_object::<Specialty>(SUBJECT_SELECT)),
        Some(Specialty::new("3", "Accounting"))
    );
}

#[test]
fn file_store_starts_empty_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("absent.json")).unwrap();
    assert_eq!(assert_ok!(store.get_raw(SUBJECT_SELECT)), None);
}

#[test]
fn file_store_starts_over_on_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{truncated").unwrap();

    let store = assert_ok!(FileStore::open(&path));
    assert_eq!(assert_ok!(store.get_raw(SUBJECT_LIST)), None);

    let prefs = Preferences::new(Arc::new(store));
    assert_ok!(prefs.put_list(SUBJECT_LIST, &subjects()));
    let reopened = Preferences::new(Arc::new(assert_ok!(FileStore::open(&path))));
    assert_eq!(assert_ok!(reopened.get_list::<Specialty>(SUBJECT_LIST)), Some(subjects()));
}

#[test]
fn file_store_rejects_non_json_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
    assert_err!(store.put_raw(SUBJECT_SELECT, "plain text".to_string()));
    assert_eq!(assert_ok!(store.get_raw(SUBJECT_SELECT)), None);
}
