//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the string-keyed slot contract the board is persisted through.
//! - Isolate SQLite query details from store/service orchestration.
//!
//! # Invariants
//! - A slot write replaces the whole value; there are no partial writes.
//! - Reading an absent slot is `Ok(None)`, never an error.

pub mod slot_repo;
