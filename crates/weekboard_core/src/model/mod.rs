//! Weekly board domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the board slot.
//! - Define the validated day-of-week index used to place tasks.
//!
//! # Invariants
//! - Every task is identified by an opaque `TaskId` assigned at creation.
//! - `DayOfWeek` values are always in `0..=6` (0 = Sunday).
//!
//! # See also
//! - crates/weekboard_core/src/service/recurrence.rs

pub mod day;
pub mod task;
