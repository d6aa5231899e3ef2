//! Command dispatch.
//!
//! # Invariants
//! - Every command loads the board first; mutations persist through
//!   [`TaskService`] before anything is printed.
//! - Unknown ids are reported on stdout and are not errors.

use crate::error::{CliError, CliResult};
use crate::render::{render_column, render_progress, render_task, render_template};
use crate::Command;
use std::io::Write;
use weekboard_core::{
    day_column, find_task, templates, week_columns, weekly_progress, DayOfWeek, NewTask,
    SlotRepository, Task, TaskId, TaskPatch, TaskService,
};

/// Runs one command against the board and writes its output to `out`.
pub fn execute<R: SlotRepository, W: Write>(
    service: &TaskService<R>,
    command: Command,
    today: DayOfWeek,
    out: &mut W,
) -> CliResult<()> {
    let tasks = service.load_for(today)?;

    match command {
        Command::Board => {
            for column in week_columns(&tasks, today) {
                write!(out, "{}", render_column(&column))?;
            }
        }
        Command::Day { day } => {
            write!(out, "{}", render_column(&day_column(&tasks, day, today)))?;
        }
        Command::Templates => {
            let list = templates(&tasks);
            if list.is_empty() {
                writeln!(out, "no templates")?;
            }
            for task in list {
                writeln!(out, "{}", render_template(task))?;
            }
        }
        Command::Add {
            title,
            category,
            day,
            time,
            description,
            recurring,
        } => {
            let title = non_blank_title(title)?;
            let mut input = NewTask::new(title, category, day);
            if let Some(time) = time {
                input = input.at(time);
            }
            if let Some(description) = description {
                input = input.with_description(description);
            }
            if let Some(pattern) = recurring {
                input = input.recurring(pattern);
            }
            let next = service.add(&tasks, input)?;
            if let Some(task) = next.last() {
                writeln!(out, "added {}", task.id)?;
            }
        }
        Command::Edit {
            id,
            title,
            category,
            day,
            time,
            clear_time,
            description,
            clear_description,
        } => {
            let id = TaskId::parse(id)?;
            let patch = TaskPatch {
                title: title.map(non_blank_title).transpose()?,
                description: if clear_description {
                    Some(None)
                } else {
                    description.map(Some)
                },
                category,
                day,
                time: if clear_time { Some(None) } else { time.map(Some) },
                ..TaskPatch::default()
            };
            if patch.is_empty() {
                return Err(CliError::InvalidInput(
                    "nothing to change; pass at least one field".to_string(),
                ));
            }
            let next = service.update(&tasks, &id, &patch)?;
            report_task(out, &next, &id, "updated")?;
        }
        Command::Done { id } => {
            let id = TaskId::parse(id)?;
            let next = service.toggle_completion(&tasks, &id, true)?;
            report_task(out, &next, &id, "completed")?;
        }
        Command::Undo { id } => {
            let id = TaskId::parse(id)?;
            let next = service.toggle_completion(&tasks, &id, false)?;
            report_task(out, &next, &id, "reopened")?;
        }
        Command::Delete { id } => {
            let id = TaskId::parse(id)?;
            let existed = find_task(&tasks, &id).is_some();
            service.delete(&tasks, &id)?;
            if existed {
                writeln!(out, "deleted {id}")?;
            } else {
                writeln!(out, "no task with id {id}")?;
            }
        }
        Command::MakeTemplate { id } => {
            let id = TaskId::parse(id)?;
            let before = tasks.len();
            let next = service.make_weekly_template(&tasks, &id)?;
            match next.get(before) {
                Some(template) => writeln!(out, "template {}", render_template(template))?,
                None => writeln!(out, "no task with id {id}")?,
            }
        }
        Command::Apply => {
            let outcome = service.apply_recurring(&tasks)?;
            writeln!(
                out,
                "applied {} templates: {} new tasks, {} skipped",
                outcome.report.templates, outcome.report.materialized, outcome.report.skipped
            )?;
        }
        Command::Stats => {
            write!(out, "{}", render_progress(&weekly_progress(&tasks)))?;
        }
        Command::Reset => {
            service.reset()?;
            writeln!(out, "board reset")?;
        }
    }

    Ok(())
}

fn non_blank_title(title: String) -> CliResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("title must not be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

fn report_task<W: Write>(out: &mut W, tasks: &[Task], id: &TaskId, verb: &str) -> CliResult<()> {
    match find_task(tasks, id) {
        Some(task) => writeln!(out, "{verb} {}", render_task(task))?,
        None => writeln!(out, "no task with id {id}")?,
    }
    Ok(())
}
