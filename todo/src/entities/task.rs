//! Task entity and related types.

use chrono::NaiveDate;

use super::TaskRecord;
use crate::errors::{TodoError, TodoResult};

/// Textual form of a due date, e.g. `2025-01-05`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked before the calendar validation.
pub fn parse_due_date(input: &str) -> TodoResult<NaiveDate> {
    let invalid = || TodoError::InvalidDate {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// Canonical capitalized name, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match capitalize(s).as_str() {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(TodoError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// First character upper case, the rest lower case.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A single to-do item.
///
/// Fields are validated on construction and only the completion flag
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    due_date: NaiveDate,
    priority: TaskPriority,
    completed: bool,
    tags: Vec<String>,
}

impl Task {
    /// Create a new, not yet completed task from user-supplied text.
    ///
    /// The date and the priority are validated independently, so a bad
    /// priority is reported as [`TodoError::InvalidPriority`] even when the
    /// date is fine. Tags are stored exactly as given.
    pub fn new(
        description: impl Into<String>,
        due_date: &str,
        priority: &str,
        tags: Vec<String>,
    ) -> TodoResult<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(TodoError::EmptyDescription);
        }

        let due_date = parse_due_date(due_date)?;
        let priority = priority.parse::<TaskPriority>()?;

        Ok(Self {
            description,
            due_date,
            priority,
            completed: false,
            tags,
        })
    }

    /// Set the completion flag while building a task
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether any tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Convert to the plain record persisted on disk
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            description: self.description.clone(),
            due_date: self.due_date.format(DATE_FORMAT).to_string(),
            priority: self.priority.to_string(),
            completed: self.completed,
            tags: self.tags.clone(),
        }
    }

    /// Rebuild a task from a stored record, re-running validation
    pub fn from_record(record: TaskRecord) -> TodoResult<Self> {
        Ok(Self::new(
            record.description,
            &record.due_date,
            &record.priority,
            record.tags,
        )?
        .with_completed(record.completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_task_new() {
        let task = Task::new("Pay rent", "2025-01-05", "high", Vec::new()).unwrap();
        assert_eq!(task.description(), "Pay rent");
        assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(task.priority(), TaskPriority::High);
        assert!(!task.is_completed());
        assert!(task.tags().is_empty());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("high".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!("MEDIUM".parse::<TaskPriority>().unwrap(), TaskPriority::Medium);
        assert_eq!("lOW".parse::<TaskPriority>().unwrap(), TaskPriority::Low);
        assert!("urgent".parse::<TaskPriority>().is_err());
        assert!("".parse::<TaskPriority>().is_err());
        assert!(" high".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_invalid_dates() {
        for input in ["2024-13-01", "not-a-date", "2024-02-30", "2024-1-05", "24-01-05", ""] {
            let err = Task::new("Task", input, "Low", Vec::new()).unwrap_err();
            assert_eq!(
                err,
                TodoError::InvalidDate {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(Task::new("Task", "2024-02-29", "Low", Vec::new()).is_ok());
    }

    // A bad priority with a good date is a priority error, not a date error.
    #[test]
    fn test_priority_error_not_reported_as_date_error() {
        let err = Task::new("Task", "2025-01-05", "urgent", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            TodoError::InvalidPriority {
                priority: "urgent".to_string()
            }
        );
    }

    #[test]
    fn test_date_checked_before_priority() {
        let err = Task::new("Task", "bad", "urgent", Vec::new()).unwrap_err();
        assert!(matches!(err, TodoError::InvalidDate { .. }));
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = Task::new("", "2025-01-05", "Low", Vec::new()).unwrap_err();
        assert_eq!(err, TodoError::EmptyDescription);
    }

    #[test]
    fn test_tags_kept_as_entered() {
        let task = Task::new("Task", "2025-01-05", "Low", tags(&["Home", "home", " x "])).unwrap();
        assert_eq!(task.tags(), tags(&["Home", "home", " x "]).as_slice());
        assert!(task.has_tag("HOME"));
        assert!(!task.has_tag("x"));
    }

    #[test]
    fn test_record_round_trip() {
        let task = Task::new("Call Bob", "2025-01-06", "low", tags(&["personal"]))
            .unwrap()
            .with_completed(true);
        let record = task.to_record();
        assert_eq!(record.due_date, "2025-01-06");
        assert_eq!(record.priority, "Low");
        assert!(record.completed);

        assert_eq!(Task::from_record(record).unwrap(), task);
    }

    #[test]
    fn test_from_record_validates() {
        let record = TaskRecord {
            description: "Task".to_string(),
            due_date: "2025-01-05".to_string(),
            priority: "someday".to_string(),
            completed: false,
            tags: Vec::new(),
        };
        assert!(matches!(
            Task::from_record(record),
            Err(TodoError::InvalidPriority { .. })
        ));
    }
}
