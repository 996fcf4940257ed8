//! Personal task tracker.
//!
//! Tasks carry a description, a due date, a priority and free-form tags.
//! A [`domain::TaskStore`] keeps them in insertion order, filters them and
//! persists the whole collection to a JSON file.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod domain;
pub mod entities;
pub mod errors;
pub mod storage;
pub mod ui;

pub use domain::{TaskFilter, TaskStore};
pub use entities::{Task, TaskPriority};
pub use errors::{TodoError, TodoResult};
