//! Next-occurrence computation.

mod scheduler;

pub use scheduler::{Scheduler, next_date};
