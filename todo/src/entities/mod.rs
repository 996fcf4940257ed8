//! Core data structures for task tracking.

mod record;
mod task;

pub use record::TaskRecord;
pub use task::{parse_due_date, Task, TaskPriority, DATE_FORMAT};
