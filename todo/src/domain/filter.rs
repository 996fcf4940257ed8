//! Filter predicates for listing tasks.

use chrono::NaiveDate;

use crate::entities::{parse_due_date, Task};
use crate::errors::{TodoError, TodoResult};

/// Which attribute a filter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Priority,
    DueDate,
    Tag,
    Keyword,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::DueDate => write!(f, "due_date"),
            Self::Tag => write!(f, "tag"),
            Self::Keyword => write!(f, "keyword"),
        }
    }
}

impl std::str::FromStr for FilterKind {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "due_date" | "due-date" => Ok(Self::DueDate),
            "tag" => Ok(Self::Tag),
            "keyword" => Ok(Self::Keyword),
            _ => Err(TodoError::UnknownFilter {
                kind: s.to_string(),
            }),
        }
    }
}

/// A predicate selecting tasks for [`super::TaskStore::list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Case-insensitive exact match on the priority name
    Priority(String),
    /// Exact calendar date match
    DueDate(NaiveDate),
    /// Case-insensitive exact match on any tag
    Tag(String),
    /// Case-insensitive substring of the description
    Keyword(String),
}

impl TaskFilter {
    /// Build a filter from a textual kind and value.
    ///
    /// Fails with [`TodoError::UnknownFilter`] for an unrecognized kind and
    /// [`TodoError::InvalidDate`] when a due date filter value does not parse.
    pub fn parse(kind: &str, value: &str) -> TodoResult<Self> {
        Self::from_kind(kind.parse()?, value)
    }

    pub fn from_kind(kind: FilterKind, value: &str) -> TodoResult<Self> {
        Ok(match kind {
            FilterKind::Priority => Self::Priority(value.to_string()),
            FilterKind::DueDate => Self::DueDate(parse_due_date(value)?),
            FilterKind::Tag => Self::Tag(value.to_string()),
            FilterKind::Keyword => Self::Keyword(value.to_string()),
        })
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Priority(_) => FilterKind::Priority,
            Self::DueDate(_) => FilterKind::DueDate,
            Self::Tag(_) => FilterKind::Tag,
            Self::Keyword(_) => FilterKind::Keyword,
        }
    }

    /// Whether `task` satisfies this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Priority(value) => task.priority().as_str().eq_ignore_ascii_case(value),
            Self::DueDate(date) => task.due_date() == *date,
            Self::Tag(value) => task.has_tag(value),
            Self::Keyword(value) => task
                .description()
                .to_lowercase()
                .contains(&value.to_lowercase()),
        }
    }
}
