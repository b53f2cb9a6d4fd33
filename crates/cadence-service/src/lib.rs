//! Caller-side scheduling contract: how task writes and completions use the
//! recurrence engine.

pub mod engine;
pub mod error;
pub mod task;
