//! Weekly completion progress.

use crate::model::task::{Task, TaskCategory};

/// Completion ratio of a task subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionStat {
    pub completed: usize,
    pub total: usize,
    /// `round(completed * 100 / total)`, `0` when `total == 0`.
    pub percent: u8,
}

impl CompletionStat {
    fn from_counts(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // Half-up rounding in integers; result is within 0..=100.
            ((completed * 200 + total) / (total * 2)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

/// Progress over schedulable tasks, overall and per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyProgress {
    pub overall: CompletionStat,
    pub work: CompletionStat,
    pub personal: CompletionStat,
    pub habit: CompletionStat,
}

impl WeeklyProgress {
    pub fn category(&self, category: TaskCategory) -> CompletionStat {
        match category {
            TaskCategory::Work => self.work,
            TaskCategory::Personal => self.personal,
            TaskCategory::Habit => self.habit,
        }
    }
}

/// Computes progress, ignoring templates.
pub fn weekly_progress(tasks: &[Task]) -> WeeklyProgress {
    let stat = |category: Option<TaskCategory>| {
        let subset = tasks
            .iter()
            .filter(|task| !task.is_recurring)
            .filter(|task| category.map_or(true, |category| task.category == category));
        let (completed, total) = subset.fold((0, 0), |(completed, total), task| {
            (completed + usize::from(task.is_completed), total + 1)
        });
        CompletionStat::from_counts(completed, total)
    };

    WeeklyProgress {
        overall: stat(None),
        work: stat(Some(TaskCategory::Work)),
        personal: stat(Some(TaskCategory::Personal)),
        habit: stat(Some(TaskCategory::Habit)),
    }
}

#[cfg(test)]
mod tests {
    use super::{weekly_progress, CompletionStat};
    use crate::model::day::DayOfWeek;
    use crate::model::task::{NewTask, RecurringPattern, Task, TaskCategory};

    fn task(category: TaskCategory, done: bool) -> Task {
        let mut task = Task::new(NewTask::new("t", category, DayOfWeek::MONDAY));
        task.is_completed = done;
        task
    }

    #[test]
    fn empty_board_reports_zero_percent() {
        let progress = weekly_progress(&[]);
        assert_eq!(progress.overall, CompletionStat::default());
    }

    #[test]
    fn percentages_round_half_up_and_skip_templates() {
        let mut template = Task::new(
            NewTask::new("tpl", TaskCategory::Work, DayOfWeek::MONDAY)
                .recurring(RecurringPattern::Daily),
        );
        template.is_completed = true;
        let tasks = vec![
            task(TaskCategory::Work, true),
            task(TaskCategory::Work, false),
            task(TaskCategory::Work, false),
            task(TaskCategory::Habit, true),
            task(TaskCategory::Habit, true),
            task(TaskCategory::Personal, false),
            task(TaskCategory::Personal, true),
            template,
        ];

        let progress = weekly_progress(&tasks);

        assert_eq!(
            progress.overall,
            CompletionStat {
                completed: 4,
                total: 7,
                percent: 57,
            }
        );
        assert_eq!(progress.work.percent, 33);
        assert_eq!(progress.category(TaskCategory::Habit).percent, 100);
        assert_eq!(progress.personal.percent, 50);
    }
}
