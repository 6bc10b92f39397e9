use tempfile::TempDir;

use super::*;
use crate::gate::RequestKind;
use crate::models::{BlockType, Plan, PlanBlock, TaskStatus};
use crate::params::{CreateTask, Id, ListTasks};

async fn build_store(dir: &TempDir) -> TaskStore {
    TaskStoreBuilder::new()
        .with_database_path(Some(dir.path().join("session-test.db")))
        .build()
        .await
        .expect("Failed to build store")
}

fn plan_with_total(total: u32) -> Plan {
    Plan {
        blocks: vec![PlanBlock {
            block_id: 1,
            kind: BlockType::Work,
            duration_minutes: total,
            tasks: vec!["t".to_string()],
            split_info: None,
        }],
        total_duration_minutes: total,
        total_blocks: 1,
        quick_task_used: false,
        seed_used: None,
        variation_explanation: None,
    }
}

#[tokio::test]
async fn test_add_and_get_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir).await;

    let created = store
        .add_task(&CreateTask {
            name: "Write report".to_string(),
            description: Some("Quarterly".to_string()),
            duration_minutes: 90,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.status, TaskStatus::Added);

    let fetched = store
        .get_task(&Id {
            id: created.id.clone(),
        })
        .await
        .unwrap()
        .expect("task should exist");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_by_prefix() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir).await;

    let created = store
        .add_task(&CreateTask {
            name: "Prefix me".to_string(),
            duration_minutes: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    let fetched = store
        .get_task(&Id {
            id: created.id[..8].to_string(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.map(|t| t.id), Some(created.id));
}

#[tokio::test]
async fn test_unknown_id_operations_are_noops() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir).await;

    store
        .add_task(&CreateTask {
            name: "Survivor".to_string(),
            duration_minutes: 15,
            ..Default::default()
        })
        .await
        .unwrap();

    let missing = Id {
        id: "does-not-exist".to_string(),
    };
    assert!(store.toggle_complete(&missing).await.unwrap().is_none());
    assert!(store.delete_task(&missing).await.unwrap().is_none());

    let tasks = store.list_tasks(&ListTasks::default()).await.unwrap();
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_session_fencing_discards_stale_response() {
    let mut session = Session::new();

    let first = session.begin_request(RequestKind::Generate);
    let second = session.begin_request(RequestKind::Regenerate);

    // The newer request's response lands first
    assert!(session.apply_plan(second, plan_with_total(120)));
    session.finish_request(RequestKind::Regenerate);

    // The slow first response must not overwrite it
    assert!(!session.apply_plan(first, plan_with_total(30)));
    session.finish_request(RequestKind::Generate);

    assert_eq!(session.plan().unwrap().total_duration_minutes, 120);
}

#[test]
fn test_session_fences_errors_too() {
    let mut session = Session::new();

    let stale = session.begin_request(RequestKind::Generate);
    let fresh = session.begin_request(RequestKind::Generate);

    assert!(!session.record_error(stale, "Unable to generate plan"));
    assert!(session.plan_error().is_none());

    assert!(session.record_error(fresh, "Unable to generate plan"));
    assert_eq!(session.plan_error(), Some("Unable to generate plan"));
}

#[test]
fn test_begin_request_sets_flags_and_clears_error() {
    let mut session = Session::new();

    let seq = session.begin_request(RequestKind::Generate);
    assert!(session.is_generating());
    assert!(!session.is_regenerating());

    session.record_error(seq, "Unable to generate plan");
    session.finish_request(RequestKind::Generate);
    assert!(!session.is_generating());

    // Starting the next request clears the stale error
    session.begin_request(RequestKind::Regenerate);
    assert!(session.plan_error().is_none());
    assert!(session.is_regenerating());
}

#[test]
fn test_plan_is_replaced_wholesale() {
    let mut session = Session::new();

    session.set_plan(plan_with_total(60));
    session.set_plan(plan_with_total(90));
    assert_eq!(session.plan().unwrap().total_duration_minutes, 90);

    session.clear_plan();
    assert!(session.plan().is_none());
}
