//! JSON file storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entities::TaskRecord;
use crate::errors::{TodoError, TodoResult};

/// Data file used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Reads and writes the whole record list as one pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage backed by `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, or `None` if the file does not exist
    pub fn read_records(&self) -> TodoResult<Option<Vec<TaskRecord>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(TodoError::FileReadError {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let records: Vec<TaskRecord> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "read records");
        Ok(Some(records))
    }

    /// Replace the file contents with `records`
    pub fn write_records(&self, records: &[TaskRecord]) -> TodoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).map_err(|e| TodoError::FileWriteError {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), count = records.len(), "wrote records");
        Ok(())
    }
}
