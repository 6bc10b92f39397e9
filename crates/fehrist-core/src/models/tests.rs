use jiff::Timestamp;
use serde_json::json;

use super::*;

fn sample_task() -> Task {
    Task {
        id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".to_string(),
        name: "Write report".to_string(),
        description: Some("Quarterly summary".to_string()),
        priority: Priority::High,
        difficulty: Difficulty::Medium,
        duration_minutes: 90,
        status: TaskStatus::Added,
        position: 0,
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1640995200).unwrap(),
    }
}

#[test]
fn test_priority_wire_codes() {
    assert_eq!(u8::from(Priority::Low), 1);
    assert_eq!(u8::from(Priority::Medium), 2);
    assert_eq!(u8::from(Priority::High), 3);
    assert_eq!(Priority::try_from(3).unwrap(), Priority::High);
    assert!(Priority::try_from(0).is_err());
    assert!(Priority::try_from(4).is_err());
}

#[test]
fn test_status_toggle_is_involution() {
    assert_eq!(TaskStatus::Added.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Added);
    assert_eq!(TaskStatus::Added.toggled().toggled(), TaskStatus::Added);
    // Deleted tasks never toggle back to life
    assert_eq!(TaskStatus::Deleted.toggled(), TaskStatus::Deleted);
}

#[test]
fn test_enum_parsing_is_case_insensitive() {
    assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
    assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("deleted".parse::<TaskStatus>().unwrap(), TaskStatus::Deleted);
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_task_payload_wire_shape() {
    let task = sample_task();
    let payload = TaskPayload::from(&task);
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
            "name": "Write report",
            "description": "Quarterly summary",
            "priority": 3,
            "difficulty": 2,
            "durationMinutes": 90,
            "status": 1,
        })
    );
}

#[test]
fn test_task_payload_omits_missing_description() {
    let mut task = sample_task();
    task.description = None;
    let value = serde_json::to_value(TaskPayload::from(&task)).unwrap();
    assert!(value.get("description").is_none());
}

#[test]
fn test_regenerate_request_carries_randomness() {
    let task = sample_task();
    let request = RegenerateRequest::new(std::slice::from_ref(&task), 0.35);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["randomness"], json!(0.35));
    assert_eq!(value["tasks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_plan_decodes_service_response() {
    let body = json!({
        "blocks": [
            {
                "blockId": 1,
                "type": "work",
                "durationMinutes": 50,
                "tasks": ["a", "b"],
            },
            {
                "blockId": 2,
                "type": "break",
                "durationMinutes": 10,
                "tasks": [],
            },
            {
                "blockId": 3,
                "type": "work",
                "durationMinutes": 40,
                "tasks": ["c"],
                "splitInfo": {
                    "originalTaskId": "c",
                    "part": 1,
                    "totalParts": 2,
                },
            },
        ],
        "totalDurationMinutes": 100,
        "totalBlocks": 3,
        "quickTaskUsed": true,
        "seedUsed": 42,
        "variationExplanation": "Front-loaded the quick task.",
    });

    let plan: Plan = serde_json::from_value(body).unwrap();
    assert_eq!(plan.total_blocks, 3);
    assert_eq!(plan.total_duration_minutes, 100);
    assert!(plan.quick_task_used);
    assert_eq!(plan.seed_used, Some(42));
    assert_eq!(plan.work_block_count(), 2);
    assert_eq!(plan.referenced_task_ids(), vec!["a", "b", "c"]);

    let split = plan.blocks[2].split_info.as_ref().unwrap();
    assert_eq!(split.original_task_id, "c");
    assert_eq!(split.part, 1);
    assert_eq!(split.total_parts, 2);
}

#[test]
fn test_plan_decode_tolerates_generate_shape() {
    // Generate responses omit seedUsed and variationExplanation entirely.
    let body = json!({
        "blocks": [],
        "totalDurationMinutes": 0,
        "totalBlocks": 0,
        "quickTaskUsed": false,
    });

    let plan: Plan = serde_json::from_value(body).unwrap();
    assert_eq!(plan.seed_used, None);
    assert_eq!(plan.variation_explanation, None);
}

#[test]
fn test_task_filter_defaults_hide_deleted() {
    let filter = TaskFilter::default();
    assert!(!filter.include_deleted);
    assert!(filter.status.is_none());

    let all = TaskFilter::all();
    assert!(all.include_deleted);
}

#[test]
fn test_rollup_counts() {
    let mut tasks = vec![sample_task()];

    let mut done = sample_task();
    done.id = "b".repeat(36);
    done.status = TaskStatus::Completed;
    tasks.push(done);

    let mut gone = sample_task();
    gone.id = "c".repeat(36);
    gone.status = TaskStatus::Deleted;
    tasks.push(gone);

    let rollup = TaskRollup::of(&tasks);
    assert_eq!(rollup.visible, 2);
    assert_eq!(rollup.completed, 1);
    assert_eq!(rollup.deleted, 1);
    // Completed tasks no longer count toward remaining effort
    assert_eq!(rollup.remaining_minutes, 90);
}

#[test]
fn test_short_id() {
    let task = sample_task();
    assert_eq!(task.short_id(), "3f2504e0");
}
