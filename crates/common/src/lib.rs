//! Shared pieces used across the portal workspace.
//! - Logging initialization helpers (`utils::logging`).
//! - Small types every crate agrees on (`types`).

pub mod types;
pub mod utils;
