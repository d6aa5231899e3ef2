//! Recurrence expansion.
//!
//! # Responsibility
//! - Materialize schedulable instances from recurring templates.
//!
//! # Invariants
//! - A `(title, day)` pair already held by a non-recurring task is satisfied;
//!   category, time and description play no part in the check.
//! - Templates are processed in list order against the growing result, so an
//!   instance produced for one template satisfies later templates with the
//!   same title.
//! - `Monthly` templates are never expanded.
//! - Expansion is idempotent.

use crate::model::day::DayOfWeek;
use crate::model::task::{RecurringPattern, Task};
use log::debug;

const WHOLE_WEEK: &[DayOfWeek] = &DayOfWeek::ALL;

/// Summary of one expansion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurrenceReport {
    /// Templates visited.
    pub templates: usize,
    /// New instances appended.
    pub materialized: usize,
    /// Templates with no expandable pattern (`monthly` or unset).
    pub skipped: usize,
}

/// Returns `tasks` with all missing template instances appended.
pub fn apply_recurring_tasks(tasks: &[Task]) -> Vec<Task> {
    expand_recurring(tasks).0
}

/// Same as [`apply_recurring_tasks`], also reporting what happened.
pub fn expand_recurring(tasks: &[Task]) -> (Vec<Task>, RecurrenceReport) {
    let mut next = tasks.to_vec();
    let mut report = RecurrenceReport::default();

    for template in tasks.iter().filter(|task| task.is_template()) {
        report.templates += 1;
        let days: &[DayOfWeek] = match template.effective_pattern() {
            Some(RecurringPattern::Daily) => WHOLE_WEEK,
            Some(RecurringPattern::Weekly) => std::slice::from_ref(&template.day),
            Some(RecurringPattern::Monthly) | None => {
                report.skipped += 1;
                debug!(
                    "event=recurrence_skip module=service template_id={} pattern={}",
                    template.id,
                    template
                        .recurring_pattern
                        .map_or("none", RecurringPattern::label)
                );
                continue;
            }
        };

        for &day in days {
            if !has_instance(&next, &template.title, day) {
                next.push(template.instance_on(day));
                report.materialized += 1;
            }
        }
    }

    (next, report)
}

fn has_instance(tasks: &[Task], title: &str, day: DayOfWeek) -> bool {
    tasks
        .iter()
        .any(|task| !task.is_recurring && task.day == day && task.title == title)
}

#[cfg(test)]
mod tests {
    use super::{apply_recurring_tasks, expand_recurring, RecurrenceReport};
    use crate::model::day::DayOfWeek;
    use crate::model::task::{NewTask, RecurringPattern, Task, TaskCategory};

    fn template(title: &str, day: DayOfWeek, pattern: RecurringPattern) -> Task {
        Task::new(NewTask::new(title, TaskCategory::Work, day).recurring(pattern))
    }

    #[test]
    fn daily_template_fills_whole_week() {
        let tasks = vec![template("Standup", DayOfWeek::TUESDAY, RecurringPattern::Daily)];

        let next = apply_recurring_tasks(&tasks);

        let instances: Vec<_> = next.iter().filter(|task| !task.is_recurring).collect();
        assert_eq!(instances.len(), 7);
        for (instance, day) in instances.iter().zip(DayOfWeek::ALL) {
            assert_eq!(instance.day, day);
            assert_eq!(instance.title, "Standup");
        }
    }

    #[test]
    fn weekly_template_satisfied_by_existing_task() {
        let tasks = vec![
            template("Call", DayOfWeek::THURSDAY, RecurringPattern::Weekly),
            Task::new(NewTask::new("Call", TaskCategory::Personal, DayOfWeek::THURSDAY)),
        ];

        let (next, report) = expand_recurring(&tasks);

        assert_eq!(next, tasks);
        assert_eq!(report.materialized, 0);
    }

    #[test]
    fn monthly_template_is_skipped() {
        let tasks = vec![template("Rent", DayOfWeek::MONDAY, RecurringPattern::Monthly)];

        let (next, report) = expand_recurring(&tasks);

        assert_eq!(next, tasks);
        assert_eq!(
            report,
            RecurrenceReport {
                templates: 1,
                materialized: 0,
                skipped: 1,
            }
        );
    }

    #[test]
    fn later_template_sees_earlier_materialization() {
        let tasks = vec![
            template("Review", DayOfWeek::MONDAY, RecurringPattern::Daily),
            template("Review", DayOfWeek::WEDNESDAY, RecurringPattern::Weekly),
        ];

        let (next, report) = expand_recurring(&tasks);

        assert_eq!(report.materialized, 7);
        assert_eq!(next.len(), 9);
    }

    #[test]
    fn expansion_is_idempotent() {
        let tasks = vec![
            template("Standup", DayOfWeek::MONDAY, RecurringPattern::Daily),
            template("Call", DayOfWeek::SATURDAY, RecurringPattern::Weekly),
        ];

        let once = apply_recurring_tasks(&tasks);
        let twice = apply_recurring_tasks(&once);

        assert_eq!(once.len(), 10);
        assert_eq!(twice, once);
    }
}
