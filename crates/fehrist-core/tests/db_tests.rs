use fehrist_core::models::{Difficulty, Priority, TaskFilter, TaskStatus};
use fehrist_core::{Database, StoreError};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn insert(db: &mut Database, name: &str) -> fehrist_core::Task {
    db.insert_task(name, None, Priority::Medium, Difficulty::Medium, 30)
        .expect("Failed to insert task")
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_insert_task() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .insert_task(
            "Write report",
            Some("Quarterly summary"),
            Priority::High,
            Difficulty::Medium,
            90,
        )
        .expect("Failed to insert task");

    assert_eq!(task.name, "Write report");
    assert_eq!(task.description, Some("Quarterly summary".to_string()));
    assert_eq!(task.status, TaskStatus::Added);
    assert_eq!(task.position, 0);
    assert!(!task.id.is_empty());
}

#[test]
fn test_insert_assigns_unique_ids_and_positions() {
    let (_temp_file, mut db) = create_test_db();

    let first = insert(&mut db, "First");
    let second = insert(&mut db, "Second");
    let third = insert(&mut db, "Third");

    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);
    assert_eq!(
        (first.position, second.position, third.position),
        (0, 1, 2)
    );
}

#[test]
fn test_list_preserves_insertion_order() {
    let (_temp_file, mut db) = create_test_db();

    insert(&mut db, "First");
    insert(&mut db, "Second");
    insert(&mut db, "Third");

    let names: Vec<String> = db
        .list_tasks(None)
        .expect("Failed to list tasks")
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_toggle_flips_between_added_and_completed() {
    let (_temp_file, mut db) = create_test_db();
    let task = insert(&mut db, "Toggle me");

    let toggled = db
        .toggle_task(&task.id)
        .expect("Failed to toggle")
        .expect("Task should exist");
    assert_eq!(toggled.status, TaskStatus::Completed);

    let toggled_back = db
        .toggle_task(&task.id)
        .expect("Failed to toggle")
        .expect("Task should exist");
    assert_eq!(toggled_back.status, TaskStatus::Added);
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.toggle_task("missing").expect("Failed to toggle");
    assert!(result.is_none());
}

#[test]
fn test_mark_deleted_keeps_row() {
    let (_temp_file, mut db) = create_test_db();
    let task = insert(&mut db, "Doomed");

    let deleted = db
        .mark_deleted(&task.id)
        .expect("Failed to delete")
        .expect("Task should exist");
    assert_eq!(deleted.status, TaskStatus::Deleted);

    // Hidden from the default listing
    let visible = db.list_tasks(None).expect("Failed to list");
    assert!(visible.is_empty());

    // Still present when deleted tasks are included
    let all = db
        .list_tasks(Some(&TaskFilter::all()))
        .expect("Failed to list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, TaskStatus::Deleted);
}

#[test]
fn test_deleted_task_does_not_toggle() {
    let (_temp_file, mut db) = create_test_db();
    let task = insert(&mut db, "Doomed");
    db.mark_deleted(&task.id).expect("Failed to delete");

    let after = db
        .toggle_task(&task.id)
        .expect("Failed to toggle")
        .expect("Task row still exists");
    assert_eq!(after.status, TaskStatus::Deleted);
}

#[test]
fn test_purge_removes_row() {
    let (_temp_file, mut db) = create_test_db();
    let task = insert(&mut db, "Purge me");

    let purged = db.purge_task(&task.id).expect("Failed to purge");
    assert_eq!(purged.id, task.id);

    let all = db
        .list_tasks(Some(&TaskFilter::all()))
        .expect("Failed to list");
    assert!(all.is_empty());
}

#[test]
fn test_purge_unknown_id_errors() {
    let (_temp_file, mut db) = create_test_db();

    match db.purge_task("missing") {
        Err(StoreError::TaskNotFound { id }) => assert_eq!(id, "missing"),
        other => panic!("Expected TaskNotFound, got {other:?}"),
    }
}

#[test]
fn test_resolve_task_id_prefix() {
    let (_temp_file, mut db) = create_test_db();
    let task = insert(&mut db, "Find me");

    let resolved = db
        .resolve_task_id(&task.id[..8])
        .expect("Failed to resolve");
    assert_eq!(resolved, Some(task.id.clone()));

    let missing = db.resolve_task_id("zzzzzzzz").expect("Failed to resolve");
    assert!(missing.is_none());
}

#[test]
fn test_resolve_ambiguous_prefix_errors() {
    let (_temp_file, mut db) = create_test_db();
    insert(&mut db, "One");
    insert(&mut db, "Two");

    // Every UUID matches the empty prefix
    match db.resolve_task_id("") {
        Err(StoreError::InvalidInput { field, .. }) => assert_eq!(field, "id"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_status_filter() {
    let (_temp_file, mut db) = create_test_db();
    let first = insert(&mut db, "Done");
    insert(&mut db, "Pending");
    db.toggle_task(&first.id).expect("Failed to toggle");

    let completed = db
        .list_tasks(Some(&TaskFilter::with_status(TaskStatus::Completed)))
        .expect("Failed to list");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "Done");
}
