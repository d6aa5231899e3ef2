use serde_json::json;
use weekboard_core::{
    DayOfWeek, MemorySlotRepository, NewTask, RecurringPattern, StoreError, Task, TaskCategory,
    TaskId, TaskStore, TASKS_SLOT_KEY,
};

#[test]
fn task_serializes_with_board_field_names() {
    let id = TaskId::parse("k3x9q1z").unwrap();
    let mut task = Task::with_id(
        id,
        NewTask::new("Morning workout", TaskCategory::Habit, DayOfWeek::MONDAY)
            .with_description("30 minute cardio")
            .at("06:30")
            .recurring(RecurringPattern::Daily),
    );
    task.is_completed = true;

    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "k3x9q1z",
            "title": "Morning workout",
            "description": "30 minute cardio",
            "category": "habit",
            "day": 1,
            "time": "06:30",
            "isCompleted": true,
            "isRecurring": true,
            "recurringPattern": "daily"
        })
    );
}

#[test]
fn optional_fields_are_omitted_and_accepted_when_missing() {
    let value = json!({
        "id": "a1",
        "title": "Client presentation",
        "category": "work",
        "day": 6,
        "isCompleted": false,
        "isRecurring": false
    });

    let task: Task = serde_json::from_value(value.clone()).unwrap();

    assert_eq!(task.description, None);
    assert_eq!(task.time, None);
    assert_eq!(task.recurring_pattern, None);
    assert_eq!(task.day, DayOfWeek::SATURDAY);
    assert_eq!(serde_json::to_value(&task).unwrap(), value);
}

#[test]
fn slot_with_out_of_range_day_is_corrupt() {
    let payload = json!([{
        "id": "a1",
        "title": "Broken",
        "category": "work",
        "day": 9,
        "isCompleted": false,
        "isRecurring": false
    }]);
    let store = TaskStore::new(MemorySlotRepository::with_slot(
        TASKS_SLOT_KEY,
        payload.to_string(),
    ));

    let err = store.load().unwrap_err();

    match err {
        StoreError::CorruptState { reason } => assert!(reason.contains("0..=6"), "{reason}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn slot_with_unknown_category_is_corrupt() {
    let payload = json!([{
        "id": "a1",
        "title": "Broken",
        "category": "chores",
        "day": 2,
        "isCompleted": false,
        "isRecurring": false
    }]);
    let store = TaskStore::new(MemorySlotRepository::with_slot(
        TASKS_SLOT_KEY,
        payload.to_string(),
    ));

    assert!(matches!(
        store.load().unwrap_err(),
        StoreError::CorruptState { .. }
    ));
}

#[test]
fn monthly_pattern_round_trips_through_slot() {
    let store = TaskStore::new(MemorySlotRepository::new());
    let tasks = vec![Task::new(
        NewTask::new("Pay rent", TaskCategory::Personal, DayOfWeek::FRIDAY)
            .recurring(RecurringPattern::Monthly),
    )];

    store.save(&tasks).unwrap();

    assert_eq!(store.load().unwrap(), tasks);
}
