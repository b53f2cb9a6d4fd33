//! Cadence HTTP server exposing the recurrence engine.

pub mod app;
pub mod engine_handler;
pub mod error;
