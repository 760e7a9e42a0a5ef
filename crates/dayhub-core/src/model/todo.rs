use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which list a to-do lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoCategory {
    Today,
    Tomorrow,
    ThisWeek,
}

impl TodoCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TodoCategory::Today => "Today",
            TodoCategory::Tomorrow => "Tomorrow",
            TodoCategory::ThisWeek => "This week",
        }
    }
}

/// A to-do item.
///
/// `reminder_time` is meaningful only while `remind_me` is true. The reminder
/// is a one-shot: there is no day field, so an enabled reminder matches its
/// `HH:mm` at most once per enabling within the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub category: TodoCategory,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub remind_me: bool,
    /// Time of day in `HH:mm`.
    #[serde(default)]
    pub reminder_time: Option<String>,
}

impl Todo {
    pub fn new(text: impl Into<String>, category: TodoCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            category,
            completed: false,
            created_at: Utc::now(),
            remind_me: false,
            reminder_time: None,
        }
    }

    /// Enable the reminder at the given `HH:mm` time.
    pub fn set_reminder(&mut self, time: impl Into<String>) {
        self.remind_me = true;
        self.reminder_time = Some(time.into());
    }

    /// Disable the reminder. The caller is responsible for clearing any
    /// fired record so a later re-enable can fire again.
    pub fn clear_reminder(&mut self) {
        self.remind_me = false;
    }
}

/// Sort order for to-do listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoSort {
    Newest,
    Oldest,
    DueTime,
}

/// Sort a to-do list in place.
///
/// `DueTime` orders by reminder `HH:mm` ascending; items without a reminder
/// time sort last.
pub fn sort_todos(todos: &mut [Todo], sort: TodoSort) {
    match sort {
        TodoSort::Newest => todos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TodoSort::Oldest => todos.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        TodoSort::DueTime => todos.sort_by(|a, b| {
            let key = |t: &Todo| t.reminder_time.clone().unwrap_or_else(|| "99:99".to_string());
            key(a).cmp(&key(b))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn todo_at(text: &str, created_at: DateTime<Utc>) -> Todo {
        Todo {
            created_at,
            ..Todo::new(text, TodoCategory::Today)
        }
    }

    #[test]
    fn todo_serialization() {
        let mut todo = Todo::new("Water the plants", TodoCategory::Tomorrow);
        todo.set_reminder("08:30");
        let json = serde_json::to_string(&todo).unwrap();
        let decoded: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.reminder_time.as_deref(), Some("08:30"));
        assert!(decoded.remind_me);
    }

    #[test]
    fn sort_newest_and_oldest() {
        let base = Utc::now();
        let mut todos = vec![
            todo_at("a", base - Duration::minutes(2)),
            todo_at("b", base),
            todo_at("c", base - Duration::minutes(1)),
        ];
        sort_todos(&mut todos, TodoSort::Newest);
        assert_eq!(todos[0].text, "b");
        sort_todos(&mut todos, TodoSort::Oldest);
        assert_eq!(todos[0].text, "a");
    }

    #[test]
    fn sort_due_time_puts_unscheduled_last() {
        let base = Utc::now();
        let mut early = todo_at("early", base);
        early.set_reminder("07:15");
        let mut late = todo_at("late", base);
        late.set_reminder("18:00");
        let none = todo_at("none", base);

        let mut todos = vec![none, late, early];
        sort_todos(&mut todos, TodoSort::DueTime);
        let order: Vec<_> = todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["early", "late", "none"]);
    }

    #[test]
    fn clear_reminder_keeps_last_time() {
        let mut todo = Todo::new("Call back", TodoCategory::Today);
        todo.set_reminder("12:00");
        todo.clear_reminder();
        assert!(!todo.remind_me);
        // The time sticks around so re-enabling restores the old value.
        assert_eq!(todo.reminder_time.as_deref(), Some("12:00"));
    }
}
