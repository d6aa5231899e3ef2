//! CLI runtime configuration.
//!
//! # Responsibility
//! - Resolve database and log locations from flags, env and platform dirs.
//! - Parse user-facing day/category/pattern arguments.
//!
//! # Invariants
//! - Resolved paths are absolute and their parent directories exist.

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use weekboard_core::{DayOfWeek, RecurringPattern, TaskCategory};

const APP_DIR_NAME: &str = "weekboard";
const DB_FILE_NAME: &str = "weekboard.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Effective configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Resolves configuration; explicit values win over platform defaults.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_level: String,
        log_dir: Option<PathBuf>,
    ) -> CliResult<Self> {
        let db_path = match db_path {
            Some(path) => absolutize(path)?,
            None => app_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match log_dir {
            Some(path) => absolutize(path)?,
            None => app_dir()?.join(LOG_DIR_NAME),
        };
        ensure_parent(&db_path)?;

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

fn app_dir() -> CliResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| CliError::Config("no platform data directory; pass --db".to_string()))
}

fn absolutize(path: PathBuf) -> CliResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir()
        .map_err(|err| CliError::Config(format!("cannot read current directory: {err}")))?;
    Ok(cwd.join(path))
}

fn ensure_parent(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            CliError::Config(format!(
                "cannot create directory `{}`: {err}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Accepts `0..=6` (0 = Sunday) or a day name / three-letter prefix.
pub fn parse_day(value: &str) -> Result<DayOfWeek, String> {
    let trimmed = value.trim();
    if let Ok(index) = trimmed.parse::<i64>() {
        return DayOfWeek::try_from(index).map_err(|err| err.to_string());
    }
    let lowered = trimmed.to_ascii_lowercase();
    DayOfWeek::ALL
        .into_iter()
        .find(|day| {
            let name = day.name().to_ascii_lowercase();
            lowered.len() >= 3 && name.starts_with(lowered.as_str())
        })
        .ok_or_else(|| format!("unknown day `{trimmed}`; use 0-6 or a day name"))
}

pub fn parse_category(value: &str) -> Result<TaskCategory, String> {
    TaskCategory::parse(value)
        .ok_or_else(|| format!("unknown category `{value}`; expected work|personal|habit"))
}

pub fn parse_pattern(value: &str) -> Result<RecurringPattern, String> {
    RecurringPattern::parse(value)
        .ok_or_else(|| format!("unknown pattern `{value}`; expected daily|weekly|monthly"))
}

#[cfg(test)]
mod tests {
    use super::{parse_category, parse_day, parse_pattern, CliConfig};
    use std::path::PathBuf;
    use weekboard_core::{DayOfWeek, RecurringPattern, TaskCategory};

    #[test]
    fn parse_day_accepts_index_and_names() {
        assert_eq!(parse_day("0").unwrap(), DayOfWeek::SUNDAY);
        assert_eq!(parse_day("wed").unwrap(), DayOfWeek::WEDNESDAY);
        assert_eq!(parse_day("Saturday").unwrap(), DayOfWeek::SATURDAY);
        assert!(parse_day("7").is_err());
        assert!(parse_day("t").is_err());
        assert!(parse_day("someday").is_err());
    }

    #[test]
    fn parse_category_and_pattern() {
        assert_eq!(parse_category("WORK").unwrap(), TaskCategory::Work);
        assert!(parse_category("chores").is_err());
        assert_eq!(parse_pattern("weekly").unwrap(), RecurringPattern::Weekly);
        assert!(parse_pattern("yearly").is_err());
    }

    #[test]
    fn resolve_prefers_explicit_paths_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("board.sqlite3");
        let log_dir: PathBuf = dir.path().join("logs");

        let config =
            CliConfig::resolve(Some(db_path.clone()), "info".to_string(), Some(log_dir.clone()))
                .unwrap();

        assert_eq!(config.db_path, db_path);
        assert_eq!(config.log_dir, log_dir);
        assert!(dir.path().join("nested").is_dir());
    }
}
