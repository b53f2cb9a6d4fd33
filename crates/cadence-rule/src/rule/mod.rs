//! Repeat rule grammar and date advancement.

pub mod advance;
pub mod core;
pub mod parse;
