//! Core domain logic for Weekboard, a personal weekly task board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use board::columns::{day_column, templates, week_columns, DayColumn};
pub use board::progress::{weekly_progress, CompletionStat, WeeklyProgress};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::{DayOfWeek, DayOfWeekError};
pub use model::task::{
    NewTask, RecurringPattern, Task, TaskCategory, TaskId, TaskIdError, TaskPatch,
};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use service::recurrence::{apply_recurring_tasks, expand_recurring, RecurrenceReport};
pub use service::task_ops::{
    add_task, create_recurring_task, delete_task, find_task, make_weekly_template, update_task,
};
pub use service::task_service::{ApplyOutcome, TaskService};
pub use store::seed::seed_tasks;
pub use store::task_store::{StoreError, StoreResult, TaskStore, TASKS_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
