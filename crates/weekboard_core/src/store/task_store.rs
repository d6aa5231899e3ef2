//! Task list persistence over a single slot.
//!
//! # Responsibility
//! - Load the persisted board, falling back to the seed when absent.
//! - Save the whole board as one JSON array.
//!
//! # Invariants
//! - The slot key is fixed (`TASKS_SLOT_KEY`).
//! - Invalid slot content yields `StoreError::CorruptState` and is left in
//!   place for inspection.
//! - Loading never writes; the seed is persisted by the first mutation.

use crate::model::day::DayOfWeek;
use crate::model::task::Task;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::store::seed::seed_tasks;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name holding the serialized board.
pub const TASKS_SLOT_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence adapter error.
#[derive(Debug)]
pub enum StoreError {
    /// Slot storage failure.
    Repo(RepoError),
    /// Slot holds content that does not decode into a valid task list.
    CorruptState { reason: String },
    /// Task list could not be encoded.
    Encode(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::CorruptState { reason } => {
                write!(f, "persisted board is corrupt: {reason}")
            }
            Self::Encode(reason) => write!(f, "failed to encode board: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::CorruptState { .. } | Self::Encode(_) => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Persistence adapter for the board.
pub struct TaskStore<R: SlotRepository> {
    repo: R,
}

impl<R: SlotRepository> TaskStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the board, seeding relative to the host's current weekday.
    pub fn load(&self) -> StoreResult<Vec<Task>> {
        self.load_for(DayOfWeek::today())
    }

    /// Loads the board, seeding relative to `today` when nothing is stored.
    ///
    /// # Errors
    /// - `CorruptState` when the slot is not a JSON array of valid tasks.
    /// - `Repo` when the slot cannot be read.
    pub fn load_for(&self, today: DayOfWeek) -> StoreResult<Vec<Task>> {
        let Some(raw) = self.repo.read_slot(TASKS_SLOT_KEY)? else {
            let seeded = seed_tasks(today);
            info!(
                "event=board_load module=store status=ok source=seed today={} count={}",
                today.index(),
                seeded.len()
            );
            return Ok(seeded);
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                info!(
                    "event=board_load module=store status=ok source=slot count={}",
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                error!(
                    "event=board_load module=store status=error error_code=corrupt_state bytes={} line={} column={}",
                    raw.len(),
                    err.line(),
                    err.column()
                );
                Err(StoreError::CorruptState {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Overwrites the slot with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload =
            serde_json::to_string(tasks).map_err(|err| StoreError::Encode(err.to_string()))?;
        self.repo.write_slot(TASKS_SLOT_KEY, &payload)?;
        debug!(
            "event=board_save module=store status=ok count={} bytes={}",
            tasks.len(),
            payload.len()
        );
        Ok(())
    }

    /// Clears the slot so the next load yields the seed again.
    pub fn reset(&self) -> StoreResult<()> {
        self.repo.clear_slot(TASKS_SLOT_KEY)?;
        info!("event=board_reset module=store status=ok");
        Ok(())
    }
}
