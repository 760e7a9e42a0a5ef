//! To-do management commands.

use clap::Subcommand;
use dayhub_core::model::{sort_todos, Todo, TodoCategory, TodoSort};
use dayhub_core::store::Store;

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a to-do
    Add {
        /// What needs doing
        text: String,
        /// List: today, tomorrow or week (default: today)
        #[arg(long, default_value = "today")]
        category: String,
        /// Reminder time of day (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        remind: Option<String>,
    },
    /// List to-dos
    List {
        /// Filter by list: today, tomorrow or week
        #[arg(long)]
        category: Option<String>,
        /// Order: newest, oldest or due (default: newest)
        #[arg(long, default_value = "newest")]
        sort: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark a to-do completed
    Done {
        /// To-do ID
        id: String,
    },
    /// Enable or disable a to-do's reminder
    Remind {
        /// To-do ID
        id: String,
        /// Reminder time of day (HH:MM)
        #[arg(long, value_name = "HH:MM", conflicts_with = "off")]
        at: Option<String>,
        /// Turn the reminder off
        #[arg(long)]
        off: bool,
    },
    /// Delete a to-do
    Delete {
        /// To-do ID
        id: String,
    },
}

fn parse_category(value: &str) -> Result<TodoCategory, Box<dyn std::error::Error>> {
    match value {
        "today" => Ok(TodoCategory::Today),
        "tomorrow" => Ok(TodoCategory::Tomorrow),
        "week" | "this_week" => Ok(TodoCategory::ThisWeek),
        other => Err(format!("unknown category '{other}' (today, tomorrow, week)").into()),
    }
}

fn parse_sort(value: &str) -> Result<TodoSort, Box<dyn std::error::Error>> {
    match value {
        "newest" => Ok(TodoSort::Newest),
        "oldest" => Ok(TodoSort::Oldest),
        "due" | "due_time" => Ok(TodoSort::DueTime),
        other => Err(format!("unknown sort '{other}' (newest, oldest, due)").into()),
    }
}

fn find_todo<'a>(
    todos: &'a mut [Todo],
    id: &str,
) -> Result<&'a mut Todo, Box<dyn std::error::Error>> {
    todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| format!("no to-do with id {id}").into())
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut document = store.load()?;

    match action {
        TodoAction::Add {
            text,
            category,
            remind,
        } => {
            let mut todo = Todo::new(text, parse_category(&category)?);
            if let Some(time) = remind {
                dayhub_core::model::parse_time_of_day(&time)?;
                todo.set_reminder(time);
            }
            println!("To-do created: {}", todo.id);
            document.todos.push(todo);
            store.save(&document)?;
        }
        TodoAction::List {
            category,
            sort,
            json,
        } => {
            let filter = category.as_deref().map(parse_category).transpose()?;
            let mut todos: Vec<Todo> = document
                .todos
                .into_iter()
                .filter(|t| filter.map(|c| t.category == c).unwrap_or(true))
                .collect();
            sort_todos(&mut todos, parse_sort(&sort)?);

            if json {
                println!("{}", serde_json::to_string_pretty(&todos)?);
            } else {
                for todo in &todos {
                    let state = if todo.completed { "x" } else { " " };
                    let reminder = match (&todo.remind_me, &todo.reminder_time) {
                        (true, Some(time)) => format!("  (remind {time})"),
                        _ => String::new(),
                    };
                    println!(
                        "[{state}] {}  {}  {}{reminder}",
                        todo.id,
                        todo.category.label(),
                        todo.text
                    );
                }
            }
        }
        TodoAction::Done { id } => {
            find_todo(&mut document.todos, &id)?.completed = true;
            store.save(&document)?;
            println!("To-do completed: {id}");
        }
        TodoAction::Remind { id, at, off } => {
            let todo = find_todo(&mut document.todos, &id)?;
            if off {
                todo.clear_reminder();
                println!("Reminder off for {id}");
            } else {
                let time = at.ok_or("pass --at HH:MM or --off")?;
                dayhub_core::model::parse_time_of_day(&time)?;
                todo.set_reminder(time);
                println!("Reminder set for {id}");
            }
            store.save(&document)?;
        }
        TodoAction::Delete { id } => {
            let before = document.todos.len();
            document.todos.retain(|t| t.id != id);
            if document.todos.len() == before {
                return Err(format!("no to-do with id {id}").into());
            }
            store.save(&document)?;
            println!("To-do deleted: {id}");
        }
    }

    Ok(())
}
