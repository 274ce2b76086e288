use projtrack_core::{NewProject, ProjectPatch, ProjectStore, StoreError};
use serde_json::json;
use tempfile::TempDir;

fn store_in_tempdir() -> (TempDir, ProjectStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::open(dir.path().join("projects.json"));
    (dir, store)
}

fn new_project(value: serde_json::Value) -> NewProject {
    serde_json::from_value(value).unwrap()
}

#[test]
fn create_then_get_by_id_returns_equal_record() {
    let (_dir, mut store) = store_in_tempdir();

    let created = store
        .create(new_project(json!({
            "name": "Website",
            "description": "relaunch",
            "priority": "High",
            "startDate": "2024-04-01",
            "progress": 25
        })))
        .unwrap();

    assert_eq!(store.get_by_id(&created.id), Some(&created));
}

#[test]
fn empty_patch_changes_only_updated_at() {
    let (_dir, mut store) = store_in_tempdir();
    let created = store
        .create(new_project(json!({ "name": "A", "status": "Blocked" })))
        .unwrap();

    let updated = store
        .update(&created.id, ProjectPatch::default())
        .unwrap()
        .expect("record should exist");

    assert!(updated.updated_at >= created.updated_at);
    let mut expected = created.clone();
    expected.updated_at = updated.updated_at;
    assert_eq!(updated, expected);
}

#[test]
fn update_merges_present_fields_and_keeps_identity() {
    let (_dir, mut store) = store_in_tempdir();
    let created = store.create(NewProject::named("A")).unwrap();

    let patch: ProjectPatch = serde_json::from_value(json!({
        "id": "other",
        "createdAt": "1999-01-01T00:00:00.000Z",
        "status": "Done",
        "progress": 100,
        "endDate": "2024-12-31"
    }))
    .unwrap();
    let updated = store.update(&created.id, patch).unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "A");
    assert_eq!(updated.status, "Done");
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.end_date.as_deref(), Some("2024-12-31"));
    assert_eq!(store.get_by_id(&created.id), Some(&updated));
}

#[test]
fn update_and_delete_unknown_id_return_sentinel() {
    let (_dir, mut store) = store_in_tempdir();
    store.create(NewProject::named("A")).unwrap();

    assert!(store
        .update("missing", ProjectPatch::default())
        .unwrap()
        .is_none());
    assert!(store.delete("missing").unwrap().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_removes_record_and_returns_it() {
    let (_dir, mut store) = store_in_tempdir();
    let created = store.create(NewProject::named("A")).unwrap();

    let removed = store.delete(&created.id).unwrap();

    assert_eq!(removed, Some(created.clone()));
    assert!(store.get_by_id(&created.id).is_none());
    assert!(store.is_empty());
}

#[test]
fn get_by_status_is_exact_ordered_subset() {
    let (_dir, mut store) = store_in_tempdir();
    for (name, status) in [
        ("one", "Done"),
        ("two", "Todo"),
        ("three", "done"),
        ("four", "Done"),
        ("five", "In Progress"),
    ] {
        store
            .create(new_project(json!({ "name": name, "status": status })))
            .unwrap();
    }

    let done = store.get_by_status("Done");
    let expected: Vec<_> = store
        .get_all()
        .iter()
        .filter(|project| project.status == "Done")
        .collect();

    assert_eq!(done, expected);
    let names: Vec<_> = done.iter().map(|project| project.name.as_str()).collect();
    assert_eq!(names, vec!["one", "four"]);
    assert!(store.get_by_status("Archived").is_empty());
}

#[test]
fn ids_are_unique_under_rapid_creation() {
    let (_dir, mut store) = store_in_tempdir();
    for index in 0..50 {
        store.create(NewProject::named(format!("p{index}"))).unwrap();
    }

    let mut ids: Vec<_> = store.get_all().iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn scenario_create_filter_delete() {
    let (_dir, mut store) = store_in_tempdir();
    assert!(store.get_all().is_empty());

    let a = store.create(NewProject::named("A")).unwrap();
    assert_eq!(a.status, "Todo");
    assert_eq!(a.priority, "Medium");
    assert_eq!(a.progress, 0);
    assert_eq!(a.description, "");
    assert!(!a.id.is_empty());
    assert_eq!(a.created_at, a.updated_at);
    assert!(a.start_date.is_none());
    assert!(a.end_date.is_none());

    let b = store
        .create(new_project(json!({ "name": "B", "status": "Done" })))
        .unwrap();
    let done = store.get_by_status("Done");
    assert_eq!(done, vec![&b]);

    store.delete(&a.id).unwrap();
    assert_eq!(store.get_all(), &[b][..]);
}

#[test]
fn failed_save_keeps_mutation_in_memory_and_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    std::fs::create_dir(&blocked).unwrap();
    let mut store = ProjectStore::empty(&blocked);

    let err = store.create(NewProject::named("A")).unwrap_err();

    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(err.code(), "write_failed");
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_all()[0].name, "A");
}
