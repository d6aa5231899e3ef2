//! Board persistence adapter.
//!
//! # Responsibility
//! - Serialize the whole task list into one named slot and back.
//! - Provide the seed board used when nothing has been persisted yet.
//!
//! # Invariants
//! - `save` overwrites the slot wholesale; there is no merge.
//! - Corrupt slot content is reported, never replaced by the seed.

pub mod seed;
pub mod task_store;
