//! Day column and template list projections.

use crate::model::day::DayOfWeek;
use crate::model::task::{Task, TaskCategory};

/// Schedulable tasks of one day, grouped by category in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn<'a> {
    pub day: DayOfWeek,
    pub is_today: bool,
    pub work: Vec<&'a Task>,
    pub personal: Vec<&'a Task>,
    pub habit: Vec<&'a Task>,
}

impl<'a> DayColumn<'a> {
    pub fn len(&self) -> usize {
        self.work.len() + self.personal.len() + self.habit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Group for `category`.
    pub fn group(&self, category: TaskCategory) -> &[&'a Task] {
        match category {
            TaskCategory::Work => &self.work,
            TaskCategory::Personal => &self.personal,
            TaskCategory::Habit => &self.habit,
        }
    }
}

/// Builds the column for `day`, flagging it when it matches `today`.
pub fn day_column(tasks: &[Task], day: DayOfWeek, today: DayOfWeek) -> DayColumn<'_> {
    let mut column = DayColumn {
        day,
        is_today: day == today,
        work: Vec::new(),
        personal: Vec::new(),
        habit: Vec::new(),
    };

    for task in tasks
        .iter()
        .filter(|task| !task.is_recurring && task.day == day)
    {
        match task.category {
            TaskCategory::Work => column.work.push(task),
            TaskCategory::Personal => column.personal.push(task),
            TaskCategory::Habit => column.habit.push(task),
        }
    }

    column
}

/// All seven columns, Sunday first.
pub fn week_columns(tasks: &[Task], today: DayOfWeek) -> Vec<DayColumn<'_>> {
    DayOfWeek::ALL
        .iter()
        .map(|&day| day_column(tasks, day, today))
        .collect()
}

/// Recurring templates in board order.
pub fn templates(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_recurring).collect()
}
