//! Pure task-list reducers.
//!
//! # Responsibility
//! - Compute the next board from the current board and one command.
//!
//! # Invariants
//! - Input slices are never modified; every reducer returns a new `Vec`.
//! - Unknown ids are silent no-ops, not errors.
//! - List order is preserved; new entries are appended.

use crate::model::task::{NewTask, RecurringPattern, Task, TaskId, TaskPatch};

/// Appends `input` as a new task with a freshly generated id.
pub fn add_task(tasks: &[Task], input: NewTask) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(Task::new(input));
    next
}

/// Merges `patch` over every task whose id is `id`.
pub fn update_task(tasks: &[Task], id: &TaskId, patch: &TaskPatch) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.id == *id {
                task.apply_patch(patch);
            }
            task
        })
        .collect()
}

/// Removes every task whose id is `id`.
pub fn delete_task(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != *id).cloned().collect()
}

/// Appends a template copied from `source` with a fresh id.
///
/// The source task, if it is part of `tasks`, is left as is.
pub fn create_recurring_task(tasks: &[Task], source: &Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(source.to_template());
    next
}

/// Turns an existing task into a weekly template on its own day.
///
/// Unknown ids leave the list unchanged.
pub fn make_weekly_template(tasks: &[Task], id: &TaskId) -> Vec<Task> {
    match find_task(tasks, id) {
        Some(source) => {
            let mut source = source.clone();
            source.recurring_pattern = Some(RecurringPattern::Weekly);
            create_recurring_task(tasks, &source)
        }
        None => tasks.to_vec(),
    }
}

pub fn find_task<'a>(tasks: &'a [Task], id: &TaskId) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == *id)
}
