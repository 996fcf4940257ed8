//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{Task, TaskPriority};

/// Color a piece of text by task priority
pub fn priority_colored(priority: TaskPriority, text: &str) -> ColoredString {
    match priority {
        TaskPriority::High => text.red(),
        TaskPriority::Medium => text.yellow(),
        TaskPriority::Low => text.green(),
    }
}

fn status_glyph(task: &Task) -> &'static str {
    if task.is_completed() {
        "✅"
    } else {
        "❌"
    }
}

fn tags_text(task: &Task) -> String {
    if task.tags().is_empty() {
        "No tags".to_string()
    } else {
        task.tags().join(", ")
    }
}

/// One-line summary of a task
pub fn task_line(task: &Task) -> String {
    format!(
        "{} {} | Due: {} | Priority: {} | Tags: {}",
        status_glyph(task),
        priority_colored(task.priority(), task.description()),
        task.due_date(),
        task.priority(),
        tags_text(task)
    )
}

/// Print tasks one per line, or a notice when there are none
pub fn print_task_lines(tasks: &[&Task]) {
    if tasks.is_empty() {
        print_info("No tasks found");
        return;
    }
    for task in tasks {
        println!("{}", task_line(task));
    }
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[&Task]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Done").fg(Color::Cyan),
        Cell::new("Description").fg(Color::Cyan),
        Cell::new("Due").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Tags").fg(Color::Cyan),
    ]);

    for task in tasks {
        let priority_color = match task.priority() {
            TaskPriority::High => Color::Red,
            TaskPriority::Medium => Color::Yellow,
            TaskPriority::Low => Color::Green,
        };

        table.add_row(vec![
            Cell::new(status_glyph(task)),
            Cell::new(task.description()),
            Cell::new(task.due_date()),
            Cell::new(task.priority()).fg(priority_color),
            Cell::new(tags_text(task)),
        ]);
    }

    table
}

/// Split comma-separated tag input, trimming entries and dropping empty ones
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        let out = f();
        colored::control::unset_override();
        out
    }

    #[test]
    fn test_task_line_pending_without_tags() {
        let task = Task::new("Pay rent", "2025-01-05", "high", Vec::new()).unwrap();
        let line = plain(|| task_line(&task));
        assert_eq!(
            line,
            "❌ Pay rent | Due: 2025-01-05 | Priority: High | Tags: No tags"
        );
    }

    #[test]
    fn test_task_line_completed_with_tags() {
        let task = Task::new(
            "Call Bob",
            "2025-01-06",
            "low",
            vec!["personal".to_string(), "phone".to_string()],
        )
        .unwrap()
        .with_completed(true);
        let line = plain(|| task_line(&task));
        assert!(line.starts_with("✅ Call Bob"));
        assert!(line.ends_with("Tags: personal, phone"));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" work, ,Home ,"), vec!["work", "Home"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_task_table_rows() {
        let a = Task::new("a", "2025-01-05", "Low", Vec::new()).unwrap();
        let b = Task::new("b", "2025-01-06", "High", Vec::new()).unwrap();
        let table = task_table(&[&a, &b]);
        assert_eq!(table.row_iter().count(), 2);
    }
}
