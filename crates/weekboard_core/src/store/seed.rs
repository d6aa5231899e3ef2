//! Seed board for first launch.
//!
//! Sample tasks are placed relative to the current weekday, so the output is
//! deterministic for a given `today` but ids are fresh on every call.

use crate::model::day::DayOfWeek;
use crate::model::task::{NewTask, RecurringPattern, Task, TaskCategory};

/// Builds the first-launch board for `today`.
///
/// Contains seven samples across all categories (four of them templates),
/// followed by pre-materialized `today` instances of the three daily
/// templates.
pub fn seed_tasks(today: DayOfWeek) -> Vec<Task> {
    let tomorrow = today.offset(1);

    let standup = NewTask::new("Team standup meeting", TaskCategory::Work, today)
        .with_description("Daily team check-in")
        .at("09:00");
    let workout = NewTask::new("Morning workout", TaskCategory::Habit, today)
        .with_description("30 minute cardio")
        .at("06:30");
    let reading = NewTask::new("Read for 30 minutes", TaskCategory::Habit, today)
        .with_description("Personal development book")
        .at("21:00");

    let samples = [
        standup.clone().recurring(RecurringPattern::Daily),
        NewTask::new("Complete project proposal", TaskCategory::Work, today)
            .with_description("Finalize budget and timeline")
            .at("11:00"),
        NewTask::new("Client presentation", TaskCategory::Work, tomorrow)
            .with_description("Present new design concepts")
            .at("14:00"),
        NewTask::new("Grocery shopping", TaskCategory::Personal, today)
            .with_description("Buy ingredients for dinner")
            .at("18:00"),
        NewTask::new("Call parents", TaskCategory::Personal, today.offset(3))
            .with_description("Weekly check-in call")
            .at("19:00")
            .recurring(RecurringPattern::Weekly),
        workout.clone().recurring(RecurringPattern::Daily),
        reading.clone().recurring(RecurringPattern::Daily),
        standup,
        workout,
        reading,
    ];

    samples.into_iter().map(Task::new).collect()
}
