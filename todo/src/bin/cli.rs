//! Todo CLI - personal task tracking from the terminal.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};

use todo::domain::{ConfigDomain, FilterKind, TaskFilter, TaskStore, DEFAULT_CONFIG_FILE};
use todo::entities::Task;
use todo::errors::TodoError;
use todo::ui;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal task tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data file (overrides the config file)
    #[arg(long, global = true, env = "TODO_FILE")]
    file: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, env = "TODO_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        #[arg(short, long)]
        description: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Priority (low, medium, high)
        #[arg(short, long)]
        priority: String,

        /// Tags (comma-separated)
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List tasks, optionally filtered
    List {
        /// Only tasks with this priority
        #[arg(long, conflicts_with_all = ["due_date", "tag", "keyword", "filter"])]
        priority: Option<String>,

        /// Only tasks due on this date (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["tag", "keyword", "filter"])]
        due_date: Option<String>,

        /// Only tasks carrying this tag
        #[arg(long, conflicts_with_all = ["keyword", "filter"])]
        tag: Option<String>,

        /// Only tasks whose description contains this text
        #[arg(long, conflicts_with = "filter")]
        keyword: Option<String>,

        /// Filter kind (priority, due_date, tag, keyword)
        #[arg(long, requires = "value")]
        filter: Option<String>,

        /// Value for --filter
        #[arg(long, requires = "filter")]
        value: Option<String>,

        /// Render as a table
        #[arg(long)]
        table: bool,
    },

    /// Mark a task as completed
    Complete {
        /// Exact task description
        description: String,
    },

    /// Delete a task
    Remove {
        /// Exact task description
        description: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive menu
    Menu,
}

const MENU: &str = "
=== TO-DO LIST MENU ===
1. Add Task
2. List All Tasks
3. Filter Tasks by Priority
4. Filter Tasks by Due Date
5. Filter Tasks by Tag
6. Search Tasks by Keyword
7. Mark Task as Completed
8. Delete Task
9. Exit
";

enum MenuFlow {
    Continue,
    Exit,
}

fn main() {
    // Logs go to stderr so they never mix with menu output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ConfigDomain::new(&cli.config)
        .load()
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let data_file = cli.file.unwrap_or(config.data_file);
    let mut store = TaskStore::open(&data_file)
        .with_context(|| format!("failed to load tasks from {}", data_file.display()))?;
    tracing::debug!(path = %data_file.display(), tasks = store.len(), "store ready");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add {
            description,
            due,
            priority,
            tags,
        } => {
            let tags = tags.as_deref().map(ui::parse_tags).unwrap_or_default();
            let task = Task::new(description, &due, &priority, tags)?;
            let line = ui::task_line(&task);
            store.add(task);
            save(&store, &data_file)?;
            ui::print_success(&format!("Task added: {line}"));
        }

        Commands::List {
            priority,
            due_date,
            tag,
            keyword,
            filter,
            value,
            table,
        } => {
            let filter = match (filter, value) {
                (Some(kind), Some(value)) => Some(TaskFilter::parse(&kind, &value)?),
                _ => [
                    (FilterKind::Priority, priority),
                    (FilterKind::DueDate, due_date),
                    (FilterKind::Tag, tag),
                    (FilterKind::Keyword, keyword),
                ]
                .into_iter()
                .find_map(|(kind, value)| value.map(|v| TaskFilter::from_kind(kind, &v)))
                .transpose()?,
            };

            let tasks = store.list(filter.as_ref());
            if table && !tasks.is_empty() {
                println!("{}", ui::task_table(&tasks));
            } else {
                ui::print_task_lines(&tasks);
            }
            if !tasks.is_empty() {
                println!();
                ui::print_info(&format!(
                    "{} of {} task(s) shown, {} completed overall",
                    tasks.len(),
                    store.len(),
                    store.completed_count()
                ));
            }
        }

        Commands::Complete { description } => {
            store.mark_completed(&description)?;
            save(&store, &data_file)?;
            ui::print_success("Marked as completed.");
        }

        Commands::Remove { description, yes } => {
            if store.find(&description).is_none() {
                return Err(TodoError::TaskNotFound { description }.into());
            }
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Delete task '{description}'?"))
                    .default(false)
                    .interact()?
            {
                ui::print_warning("Cancelled");
                return Ok(());
            }
            store.remove(&description)?;
            save(&store, &data_file)?;
            ui::print_success("Task deleted.");
        }

        Commands::Menu => run_menu(&mut store, &data_file)?,
    }

    Ok(())
}

fn save(store: &TaskStore, path: &Path) -> Result<()> {
    store
        .save(path)
        .with_context(|| format!("failed to save tasks to {}", path.display()))
}

fn prompt(text: &str) -> Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

fn run_menu(store: &mut TaskStore, data_file: &Path) -> Result<()> {
    loop {
        println!("{MENU}");
        let choice = prompt("Choose an option")?;

        match menu_action(store, &choice) {
            Ok(MenuFlow::Continue) => {}
            Ok(MenuFlow::Exit) => {
                save(store, data_file)?;
                ui::print_success("Tasks saved. Goodbye!");
                return Ok(());
            }
            Err(e) => match e.downcast_ref::<TodoError>() {
                Some(err) if err.is_recoverable() => ui::print_error(&format!("Error: {err}")),
                _ => return Err(e),
            },
        }
    }
}

fn menu_action(store: &mut TaskStore, choice: &str) -> Result<MenuFlow> {
    match choice {
        "1" => {
            let description = prompt("Description")?;
            let due = prompt("Due date (YYYY-MM-DD)")?;
            let priority = prompt("Priority (Low/Medium/High)")?;
            let tags = ui::parse_tags(&prompt("Tags (comma-separated)")?);
            store.add(Task::new(description, &due, &priority, tags)?);
            ui::print_success("Task added.");
        }
        "2" => ui::print_task_lines(&store.list(None)),
        "3" => {
            let value = prompt("Enter priority to filter (Low/Medium/High)")?;
            list_filtered(store, FilterKind::Priority, &value)?;
        }
        "4" => {
            let value = prompt("Enter due date (YYYY-MM-DD)")?;
            list_filtered(store, FilterKind::DueDate, &value)?;
        }
        "5" => {
            let value = prompt("Enter tag to filter")?;
            list_filtered(store, FilterKind::Tag, &value)?;
        }
        "6" => {
            let value = prompt("Enter keyword to search")?;
            list_filtered(store, FilterKind::Keyword, &value)?;
        }
        "7" => {
            let description = prompt("Enter task description to mark as completed")?;
            store.mark_completed(&description)?;
            ui::print_success("Marked as completed.");
        }
        "8" => {
            let description = prompt("Enter task description to delete")?;
            store.remove(&description)?;
            ui::print_success("Task deleted.");
        }
        "9" => return Ok(MenuFlow::Exit),
        _ => ui::print_warning("Invalid option. Try again."),
    }
    Ok(MenuFlow::Continue)
}

fn list_filtered(store: &TaskStore, kind: FilterKind, value: &str) -> Result<()> {
    let filter = TaskFilter::from_kind(kind, value)?;
    ui::print_task_lines(&store.list(Some(&filter)));
    Ok(())
}
