//! Board use-case services.
//!
//! # Responsibility
//! - Provide pure list reducers (`task_ops`) and recurrence expansion.
//! - Compose reducers with persistence in `TaskService`.
//!
//! # Invariants
//! - Reducers never mutate their input; they return the next list.
//! - Every `TaskService` mutation saves before returning.

pub mod recurrence;
pub mod task_ops;
pub mod task_service;
