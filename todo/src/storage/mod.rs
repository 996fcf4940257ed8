//! Persistence of task records.

mod file;

pub use file::{FileStorage, DEFAULT_DATA_FILE};
