//! Flutter-facing bridge for Weekboard core.

pub mod api;
