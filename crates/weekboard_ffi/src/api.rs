//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board operations to Dart via FRB as sync calls.
//! - Carry the board across the boundary as a JSON array string.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The caller owns the board: every mutating call takes the current
//!   `tasks_json` and returns the next one, which replaces it.
//! - Every mutation is persisted before the response is returned.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use weekboard_core::db::open_db;
use weekboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    weekly_progress, CompletionStat, NewTask, SqliteSlotRepository, StoreResult, Task, TaskId,
    TaskPatch, TaskService,
};

const BOARD_DB_FILE_NAME: &str = "weekboard.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Board response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Next board as JSON array; empty string on failure.
    pub tasks_json: String,
    /// Human-readable message for toasts/diagnostics.
    pub message: String,
}

impl BoardResponse {
    fn success(message: impl Into<String>, tasks: &[Task]) -> Self {
        match serde_json::to_string(tasks) {
            Ok(tasks_json) => Self {
                ok: true,
                tasks_json,
                message: message.into(),
            },
            Err(err) => Self::failure(format!("board encode failed: {err}")),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            tasks_json: String::new(),
            message: message.into(),
        }
    }
}

/// One progress bar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressItem {
    pub completed: u32,
    pub total: u32,
    pub percent: u8,
}

/// Weekly progress envelope; templates are never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressResponse {
    pub ok: bool,
    pub overall: ProgressItem,
    pub work: ProgressItem,
    pub personal: ProgressItem,
    pub habit: ProgressItem,
    pub message: String,
}

/// Loads the persisted board, or the seed board when none exists.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Corrupt persisted state is reported as a failure, not replaced.
#[flutter_rust_bridge::frb(sync)]
pub fn board_load() -> BoardResponse {
    match with_task_service(|service| service.load()) {
        Ok(tasks) => BoardResponse::success("Board loaded.", &tasks),
        Err(err) => BoardResponse::failure(format!("board_load failed: {err}")),
    }
}

/// Adds one task described by `task_json` (a task without `id`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_task(tasks_json: String, task_json: String) -> BoardResponse {
    let decoded = decode_board(&tasks_json)
        .and_then(|tasks| decode_new_task(&task_json).map(|input| (tasks, input)));
    let (tasks, input) = match decoded {
        Ok(decoded) => decoded,
        Err(message) => {
            return BoardResponse::failure(format!("board_add_task failed: {message}"))
        }
    };

    let message = if input.is_recurring {
        format!("Template \"{}\" has been added.", input.title)
    } else {
        format!("Task \"{}\" has been added.", input.title)
    };
    match with_task_service(|service| service.add(&tasks, input)) {
        Ok(next) => BoardResponse::success(message, &next),
        Err(err) => BoardResponse::failure(format!("board_add_task failed: {err}")),
    }
}

/// Replaces every editable field of task `task_id` with `task_json`.
///
/// Unknown ids leave the board unchanged and still succeed.
#[flutter_rust_bridge::frb(sync)]
pub fn board_update_task(
    tasks_json: String,
    task_id: String,
    task_json: String,
) -> BoardResponse {
    let decoded = decode_board(&tasks_json).and_then(|tasks| {
        let id = decode_task_id(task_id)?;
        let input = decode_new_task(&task_json)?;
        Ok((tasks, id, input))
    });
    let (tasks, id, input) = match decoded {
        Ok(decoded) => decoded,
        Err(message) => {
            return BoardResponse::failure(format!("board_update_task failed: {message}"))
        }
    };

    let patch = TaskPatch::from(input);
    match with_task_service(|service| service.update(&tasks, &id, &patch)) {
        Ok(next) => BoardResponse::success("Your changes have been saved.", &next),
        Err(err) => BoardResponse::failure(format!("board_update_task failed: {err}")),
    }
}

/// Sets completion state of task `task_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_completed(
    tasks_json: String,
    task_id: String,
    is_completed: bool,
) -> BoardResponse {
    let (tasks, id) = match decode_board_and_id(&tasks_json, task_id) {
        Ok(decoded) => decoded,
        Err(message) => {
            return BoardResponse::failure(format!("board_set_completed failed: {message}"))
        }
    };

    let message = if is_completed {
        "Task completed! Keep up the good work!"
    } else {
        "Task reopened."
    };
    match with_task_service(|service| service.toggle_completion(&tasks, &id, is_completed)) {
        Ok(next) => BoardResponse::success(message, &next),
        Err(err) => BoardResponse::failure(format!("board_set_completed failed: {err}")),
    }
}

/// Deletes task `task_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_task(tasks_json: String, task_id: String) -> BoardResponse {
    let (tasks, id) = match decode_board_and_id(&tasks_json, task_id) {
        Ok(decoded) => decoded,
        Err(message) => {
            return BoardResponse::failure(format!("board_delete_task failed: {message}"))
        }
    };

    let message = match tasks.iter().find(|task| task.id == id) {
        Some(task) if task.is_recurring => {
            format!("Template \"{}\" has been removed.", task.title)
        }
        Some(task) => format!("Task \"{}\" has been removed.", task.title),
        None => "Nothing to remove.".to_string(),
    };
    match with_task_service(|service| service.delete(&tasks, &id)) {
        Ok(next) => BoardResponse::success(message, &next),
        Err(err) => BoardResponse::failure(format!("board_delete_task failed: {err}")),
    }
}

/// Creates a weekly template from existing task `task_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_template(tasks_json: String, task_id: String) -> BoardResponse {
    let (tasks, id) = match decode_board_and_id(&tasks_json, task_id) {
        Ok(decoded) => decoded,
        Err(message) => {
            return BoardResponse::failure(format!("board_create_template failed: {message}"))
        }
    };

    match with_task_service(|service| service.make_weekly_template(&tasks, &id)) {
        Ok(next) if next.len() > tasks.len() => {
            BoardResponse::success("Task is now a recurring template.", &next)
        }
        Ok(next) => BoardResponse::success("Task not found; board unchanged.", &next),
        Err(err) => BoardResponse::failure(format!("board_create_template failed: {err}")),
    }
}

/// Materializes all templates onto the board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_apply_templates(tasks_json: String) -> BoardResponse {
    let tasks = match decode_board(&tasks_json) {
        Ok(tasks) => tasks,
        Err(message) => {
            return BoardResponse::failure(format!("board_apply_templates failed: {message}"))
        }
    };

    match with_task_service(|service| service.apply_recurring(&tasks)) {
        Ok(outcome) => BoardResponse::success(
            format!(
                "Templates applied: {} task(s) added to your board.",
                outcome.report.materialized
            ),
            &outcome.tasks,
        ),
        Err(err) => BoardResponse::failure(format!("board_apply_templates failed: {err}")),
    }
}

/// Computes weekly progress for `tasks_json` without touching storage.
#[flutter_rust_bridge::frb(sync)]
pub fn board_progress(tasks_json: String) -> ProgressResponse {
    match decode_board(&tasks_json) {
        Ok(tasks) => {
            let progress = weekly_progress(&tasks);
            ProgressResponse {
                ok: true,
                overall: to_progress_item(progress.overall),
                work: to_progress_item(progress.work),
                personal: to_progress_item(progress.personal),
                habit: to_progress_item(progress.habit),
                message: format!(
                    "{}/{} ({}%)",
                    progress.overall.completed, progress.overall.total, progress.overall.percent
                ),
            }
        }
        Err(message) => ProgressResponse {
            ok: false,
            overall: to_progress_item(CompletionStat::default()),
            work: to_progress_item(CompletionStat::default()),
            personal: to_progress_item(CompletionStat::default()),
            habit: to_progress_item(CompletionStat::default()),
            message: format!("board_progress failed: {message}"),
        },
    }
}

fn decode_board(tasks_json: &str) -> Result<Vec<Task>, String> {
    serde_json::from_str(tasks_json).map_err(|err| {
        warn!("event=ffi_decode module=ffi status=error target=board error={err}");
        format!("invalid board payload: {err}")
    })
}

fn decode_new_task(task_json: &str) -> Result<NewTask, String> {
    serde_json::from_str(task_json).map_err(|err| {
        warn!("event=ffi_decode module=ffi status=error target=task error={err}");
        format!("invalid task payload: {err}")
    })
}

fn decode_task_id(task_id: String) -> Result<TaskId, String> {
    TaskId::parse(task_id).map_err(|err| err.to_string())
}

fn decode_board_and_id(tasks_json: &str, task_id: String) -> Result<(Vec<Task>, TaskId), String> {
    let tasks = decode_board(tasks_json)?;
    let id = decode_task_id(task_id)?;
    Ok((tasks, id))
}

fn to_progress_item(stat: CompletionStat) -> ProgressItem {
    ProgressItem {
        completed: u32::try_from(stat.completed).unwrap_or(u32::MAX),
        total: u32::try_from(stat.total).unwrap_or(u32::MAX),
        percent: stat.percent,
    }
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("WEEKBOARD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn with_task_service<T>(
    f: impl FnOnce(&TaskService<SqliteSlotRepository<'_>>) -> StoreResult<T>,
) -> Result<T, String> {
    let db_path = resolve_board_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("board DB open failed: {err}"))?;
    let service = TaskService::new(SqliteSlotRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        board_add_task, board_apply_templates, board_create_template, board_delete_task,
        board_load, board_progress, board_set_completed, board_update_task, core_version,
        init_logging, ping,
    };
    use serde_json::{json, Value};

    fn tasks_of(json: &str) -> Vec<Value> {
        serde_json::from_str::<Vec<Value>>(json).expect("board json should decode")
    }

    fn add(board: &str, task: Value) -> String {
        let response = board_add_task(board.to_string(), task.to_string());
        assert!(response.ok, "{}", response.message);
        response.tasks_json
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn board_load_returns_json_array() {
        let response = board_load();
        assert!(response.ok, "{}", response.message);
        tasks_of(&response.tasks_json);
    }

    #[test]
    fn add_then_complete_then_delete() {
        let board = add(
            "[]",
            json!({ "title": "Dentist", "category": "personal", "day": 2, "time": "15:00" }),
        );
        let tasks = tasks_of(&board);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["isCompleted"], false);
        let id = tasks[0]["id"].as_str().unwrap().to_string();

        let completed = board_set_completed(board, id.clone(), true);
        assert!(completed.ok, "{}", completed.message);
        assert_eq!(tasks_of(&completed.tasks_json)[0]["isCompleted"], true);

        let deleted = board_delete_task(completed.tasks_json, id);
        assert!(deleted.ok, "{}", deleted.message);
        assert!(deleted.message.contains("Dentist"));
        assert!(tasks_of(&deleted.tasks_json).is_empty());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let board = add("[]", json!({ "title": "Draft", "category": "work", "day": 1 }));
        let id = tasks_of(&board)[0]["id"].as_str().unwrap().to_string();

        let response = board_update_task(
            board,
            id.clone(),
            json!({ "title": "Final", "category": "work", "day": 3, "isCompleted": true })
                .to_string(),
        );

        assert!(response.ok, "{}", response.message);
        let tasks = tasks_of(&response.tasks_json);
        assert_eq!(tasks[0]["id"], id.as_str());
        assert_eq!(tasks[0]["title"], "Final");
        assert_eq!(tasks[0]["day"], 3);
    }

    #[test]
    fn create_template_then_apply_materializes_weekly_instance() {
        let board = add("[]", json!({ "title": "Call", "category": "personal", "day": 4 }));
        let id = tasks_of(&board)[0]["id"].as_str().unwrap().to_string();

        let templated = board_create_template(board, id);
        assert!(templated.ok, "{}", templated.message);
        let tasks = tasks_of(&templated.tasks_json);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1]["isRecurring"], true);
        assert_eq!(tasks[1]["recurringPattern"], "weekly");

        let applied = board_apply_templates(templated.tasks_json);
        assert!(applied.ok, "{}", applied.message);
        assert_eq!(tasks_of(&applied.tasks_json).len(), 2);
        assert!(applied.message.contains("0 task(s)"));
    }

    #[test]
    fn invalid_payloads_fail_without_panicking() {
        let response = board_add_task("not json".to_string(), "{}".to_string());
        assert!(!response.ok);
        assert!(response.tasks_json.is_empty());

        let response = board_add_task(
            "[]".to_string(),
            json!({ "title": "x", "category": "work", "day": 7 }).to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("0..=6"));

        let response = board_delete_task("[]".to_string(), "  ".to_string());
        assert!(!response.ok);
    }

    #[test]
    fn progress_counts_non_recurring_only() {
        let board = json!([
            { "id": "a", "title": "A", "category": "work", "day": 0, "isCompleted": true, "isRecurring": false },
            { "id": "b", "title": "B", "category": "work", "day": 1, "isCompleted": false, "isRecurring": false },
            { "id": "c", "title": "C", "category": "habit", "day": 1, "isCompleted": true, "isRecurring": true, "recurringPattern": "daily" }
        ]);

        let response = board_progress(board.to_string());

        assert!(response.ok, "{}", response.message);
        assert_eq!(response.overall.total, 2);
        assert_eq!(response.overall.percent, 50);
        assert_eq!(response.habit.total, 0);
        assert_eq!(response.message, "1/2 (50%)");
    }
}
