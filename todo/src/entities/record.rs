//! Plain serializable form of a task.

use serde::{Deserialize, Serialize};

/// One task as it appears in the data file.
///
/// Values are kept as text so that a record can be read back without
/// trusting it; [`super::Task::from_record`] re-validates every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,

    /// `YYYY-MM-DD`
    pub due_date: String,

    /// `High`, `Medium` or `Low`
    pub priority: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}
