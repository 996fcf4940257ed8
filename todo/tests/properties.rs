//! Property tests for task validation and persistence.

use proptest::prelude::*;
use tempfile::TempDir;
use todo::{Task, TaskStore, TodoError};

fn date_text() -> impl Strategy<Value = String> {
    // Day capped at 28 so every generated date exists
    (1000u32..=9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn priority_text() -> impl Strategy<Value = String> {
    prop_oneof![Just("high"), Just("medium"), Just("low")].prop_flat_map(|p| {
        proptest::collection::vec(any::<bool>(), p.len()).prop_map(move |upper| {
            p.chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
    })
}

fn tag_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z][A-Za-z0-9 _-]{0,8}", 0..4)
}

fn task() -> impl Strategy<Value = Task> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        date_text(),
        priority_text(),
        tag_list(),
        any::<bool>(),
    )
        .prop_map(|(description, date, priority, tags, completed)| {
            Task::new(description, &date, &priority, tags)
                .unwrap()
                .with_completed(completed)
        })
}

proptest! {
    #[test]
    fn valid_input_constructs_and_round_trips(
        description in "[A-Za-z][A-Za-z0-9 ]{0,20}",
        date in date_text(),
        priority in priority_text(),
        tags in tag_list(),
    ) {
        let task = Task::new(description.clone(), &date, &priority, tags.clone()).unwrap();
        prop_assert_eq!(task.description(), description.as_str());
        prop_assert_eq!(task.tags(), tags.as_slice());
        prop_assert_eq!(task.to_record().due_date, date);
        prop_assert_eq!(Task::from_record(task.to_record()).unwrap(), task);
    }

    #[test]
    fn other_priorities_are_rejected(priority in "[a-zA-Z]{0,10}") {
        let lowered = priority.to_lowercase();
        prop_assume!(!["high", "medium", "low"].contains(&lowered.as_str()));

        let err = Task::new("Task", "2025-01-05", &priority, Vec::new()).unwrap_err();
        prop_assert_eq!(err, TodoError::InvalidPriority { priority });
    }

    #[test]
    fn store_survives_save_and_load(tasks in proptest::collection::vec(task(), 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let mut store = TaskStore::new();
        for task in tasks {
            store.add(task);
        }
        store.save(&path).unwrap();

        prop_assert_eq!(TaskStore::open(&path).unwrap(), store);
    }
}
