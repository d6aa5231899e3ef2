//! Read-only board projections.
//!
//! # Responsibility
//! - Derive day columns, the template list and weekly progress from a board.
//!
//! # Invariants
//! - Templates never appear in day columns or progress counts.
//! - Projections borrow the board; they never reorder or copy tasks.

pub mod columns;
pub mod progress;
