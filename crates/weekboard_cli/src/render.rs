//! Plain-text rendering of board projections.

use weekboard_core::{CompletionStat, DayColumn, Task, TaskCategory, WeeklyProgress};

pub fn render_task(task: &Task) -> String {
    let mark = if task.is_completed { "[x]" } else { "[ ]" };
    let mut line = format!("{mark} {}  {}", task.id, task.title);
    if let Some(time) = &task.time {
        line.push_str(&format!(" @ {time}"));
    }
    if let Some(description) = &task.description {
        line.push_str(&format!(" ({description})"));
    }
    line
}

pub fn render_column(column: &DayColumn<'_>) -> String {
    let today = if column.is_today { " (today)" } else { "" };
    let mut out = format!("{}{today}\n", column.day);
    if column.is_empty() {
        out.push_str("  no tasks\n");
        return out;
    }
    for category in TaskCategory::ALL {
        let group = column.group(category);
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("  {} ({})\n", category.label(), group.len()));
        for task in group {
            out.push_str(&format!("    {}\n", render_task(task)));
        }
    }
    out
}

pub fn render_template(task: &Task) -> String {
    let pattern = task.recurring_pattern.map_or("none", |pattern| pattern.label());
    format!(
        "{}  {} [{}] {} on {}",
        task.id,
        task.title,
        task.category.label(),
        pattern,
        task.day
    )
}

pub fn render_progress(progress: &WeeklyProgress) -> String {
    let mut out = format!("overall   {}\n", render_stat(progress.overall));
    for category in TaskCategory::ALL {
        out.push_str(&format!(
            "{:<9} {}\n",
            category.label(),
            render_stat(progress.category(category))
        ));
    }
    out
}

fn render_stat(stat: CompletionStat) -> String {
    format!("{}/{} ({}%)", stat.completed, stat.total, stat.percent)
}
