//! Board use-case service.
//!
//! # Responsibility
//! - Expose the caller-facing board operations.
//! - Run the pure reducer, then persist the result before returning it.
//!
//! # Invariants
//! - The persisted slot always equals the last list returned by a mutation.
//! - Callers must treat the returned list as the new source of truth.
//! - Unknown ids still persist (the unchanged list) and return `Ok`.

use crate::model::day::DayOfWeek;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::repo::slot_repo::SlotRepository;
use crate::service::recurrence::{expand_recurring, RecurrenceReport};
use crate::service::task_ops;
use crate::store::task_store::{StoreResult, TaskStore};
use log::{error, info};

/// Result of applying recurring templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Board after expansion; the new source of truth.
    pub tasks: Vec<Task>,
    pub report: RecurrenceReport,
}

/// Board service over a slot repository.
pub struct TaskService<R: SlotRepository> {
    store: TaskStore<R>,
}

impl<R: SlotRepository> TaskService<R> {
    /// Creates a service persisting through `repo`.
    pub fn new(repo: R) -> Self {
        Self {
            store: TaskStore::new(repo),
        }
    }

    /// Loads the board, seeding for the current weekday when empty.
    pub fn load(&self) -> StoreResult<Vec<Task>> {
        self.store.load()
    }

    /// Loads the board, seeding for `today` when empty.
    pub fn load_for(&self, today: DayOfWeek) -> StoreResult<Vec<Task>> {
        self.store.load_for(today)
    }

    /// Adds a task with a fresh id.
    pub fn add(&self, tasks: &[Task], input: NewTask) -> StoreResult<Vec<Task>> {
        self.commit("task_add", task_ops::add_task(tasks, input))
    }

    /// Merges `patch` over the task with `id`.
    pub fn update(&self, tasks: &[Task], id: &TaskId, patch: &TaskPatch) -> StoreResult<Vec<Task>> {
        self.commit("task_update", task_ops::update_task(tasks, id, patch))
    }

    /// Sets completion state of the task with `id`.
    pub fn toggle_completion(
        &self,
        tasks: &[Task],
        id: &TaskId,
        is_completed: bool,
    ) -> StoreResult<Vec<Task>> {
        let patch = TaskPatch::completion(is_completed);
        self.commit("task_complete", task_ops::update_task(tasks, id, &patch))
    }

    /// Removes the task with `id`.
    pub fn delete(&self, tasks: &[Task], id: &TaskId) -> StoreResult<Vec<Task>> {
        self.commit("task_delete", task_ops::delete_task(tasks, id))
    }

    /// Appends a template copied from `source`.
    pub fn create_recurring(&self, tasks: &[Task], source: &Task) -> StoreResult<Vec<Task>> {
        self.commit(
            "template_create",
            task_ops::create_recurring_task(tasks, source),
        )
    }

    /// Appends a weekly template copied from the task with `id`.
    pub fn make_weekly_template(&self, tasks: &[Task], id: &TaskId) -> StoreResult<Vec<Task>> {
        self.commit(
            "template_create",
            task_ops::make_weekly_template(tasks, id),
        )
    }

    /// Materializes missing template instances and persists once.
    pub fn apply_recurring(&self, tasks: &[Task]) -> StoreResult<ApplyOutcome> {
        let (next, report) = expand_recurring(tasks);
        let tasks = self.commit("templates_apply", next)?;
        info!(
            "event=templates_apply module=service status=ok templates={} materialized={} skipped={}",
            report.templates, report.materialized, report.skipped
        );
        Ok(ApplyOutcome { tasks, report })
    }

    /// Drops the persisted board; the next load yields the seed.
    pub fn reset(&self) -> StoreResult<()> {
        self.store.reset()
    }

    fn commit(&self, event: &'static str, next: Vec<Task>) -> StoreResult<Vec<Task>> {
        match self.store.save(&next) {
            Ok(()) => {
                info!(
                    "event={} module=service status=ok total={}",
                    event,
                    next.len()
                );
                Ok(next)
            }
            Err(err) => {
                error!(
                    "event={} module=service status=error error_code=save_failed error={}",
                    event, err
                );
                Err(err)
            }
        }
    }
}
