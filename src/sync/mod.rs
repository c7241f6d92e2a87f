//! Polling and retry support
//!
//! Waits for externally-mutated state to converge, e.g. the engine API
//! becoming reachable or a job reaching a terminal status.

mod retry;

pub use retry::{sync, Deadline, ErrorPolicy, SyncConfig, SyncError};
