//! Domain logic for task tracking.
//!
//! [`TaskStore`] owns the task collection and its persistence,
//! [`TaskFilter`] selects tasks for listing and [`ConfigDomain`] resolves
//! where the data lives.

mod config;
mod filter;
mod store;

pub use config::{ConfigDomain, TodoConfig, DEFAULT_CONFIG_FILE};
pub use filter::{FilterKind, TaskFilter};
pub use store::TaskStore;
