//! Weekboard command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, resolve configuration and start logging.
//! - Open the board database and dispatch one command.

mod commands;
mod config;
mod error;
mod render;

use clap::{Parser, Subcommand};
use config::{parse_category, parse_day, parse_pattern, CliConfig};
use error::{CliError, CliResult};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use weekboard_core::db::open_db;
use weekboard_core::{
    default_log_level, init_logging, DayOfWeek, RecurringPattern, SqliteSlotRepository,
    TaskCategory, TaskService,
};

/// Weekboard - personal weekly task board
#[derive(Parser, Debug)]
#[command(name = "weekboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Board database file
    #[arg(long, global = true, env = "WEEKBOARD_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "WEEKBOARD_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Directory for rotating log files
    #[arg(long, global = true, env = "WEEKBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Board commands. Without a command the whole week is shown.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show all seven days
    Board,

    /// Show one day (0-6 with 0 = Sunday, or a day name)
    Day {
        #[arg(value_parser = parse_day)]
        day: DayOfWeek,
    },

    /// List recurring templates
    Templates,

    /// Add a task or, with --recurring, a template
    Add {
        title: String,

        #[arg(long, short, value_parser = parse_category)]
        category: TaskCategory,

        #[arg(long, short, value_parser = parse_day)]
        day: DayOfWeek,

        /// Free-form time, e.g. 09:30
        #[arg(long, short)]
        time: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Make this a template with the given pattern
        #[arg(long, value_parser = parse_pattern)]
        recurring: Option<RecurringPattern>,
    },

    /// Change fields of an existing task
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, short, value_parser = parse_category)]
        category: Option<TaskCategory>,

        #[arg(long, short, value_parser = parse_day)]
        day: Option<DayOfWeek>,

        #[arg(long, short, conflicts_with = "clear_time")]
        time: Option<String>,

        #[arg(long)]
        clear_time: bool,

        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,

        #[arg(long)]
        clear_description: bool,
    },

    /// Mark a task completed
    Done { id: String },

    /// Mark a task not completed
    Undo { id: String },

    /// Delete a task or template
    Delete { id: String },

    /// Create a weekly template from an existing task
    MakeTemplate { id: String },

    /// Materialize templates onto the board
    Apply,

    /// Show weekly progress
    Stats,

    /// Forget the stored board; the next command starts from samples
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("weekboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::resolve(cli.db, cli.log_level, cli.log_dir)?;
    let log_dir = config
        .log_dir
        .to_str()
        .ok_or_else(|| CliError::Config("log directory is not valid UTF-8".to_string()))?;
    init_logging(&config.log_level, log_dir).map_err(CliError::Logging)?;

    info!(
        "event=cli_start module=cli status=ok core_version={} db_path={}",
        weekboard_core::core_version(),
        config.db_path.display()
    );

    let conn = open_db(&config.db_path)?;
    let service = TaskService::new(SqliteSlotRepository::new(&conn));
    let command = cli.command.unwrap_or(Command::Board);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::execute(&service, command, DayOfWeek::today(), &mut out);
    if let Err(err) = &result {
        error!("event=cli_command module=cli status=error error={err}");
    }
    result
}
