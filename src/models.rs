//! Frontend Models
//!
//! The todo entity and the pure operations the app root applies to its
//! collection.

use serde::{Deserialize, Serialize};

/// A single todo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Record identifier issued by the remote table
    pub id: String,
    pub title: String,
    pub is_completed: bool,
}

/// Todos still to be done, in collection order
pub fn incomplete_todos(todos: &[Todo]) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| !t.is_completed)
        .cloned()
        .collect()
}

/// Mark the todo with the given id as completed; other items untouched
pub fn mark_completed(todos: &mut [Todo], id: &str) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.is_completed = true;
    }
}

/// Replace the todo with the matching id by full replacement
pub fn replace_todo(todos: &mut [Todo], edited: Todo) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == edited.id) {
        *todo = edited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: &str, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: format!("Todo {}", id),
            is_completed: completed,
        }
    }

    #[test]
    fn test_incomplete_todos_filters_and_keeps_order() {
        let todos = vec![
            make_todo("a", false),
            make_todo("b", true),
            make_todo("c", false),
            make_todo("d", true),
            make_todo("e", false),
        ];

        let visible = incomplete_todos(&todos);

        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
        assert!(visible.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn test_incomplete_todos_all_done_is_empty() {
        let todos = vec![make_todo("a", true), make_todo("b", true)];
        assert!(incomplete_todos(&todos).is_empty());
    }

    #[test]
    fn test_mark_completed_touches_only_match() {
        let mut todos = vec![
            make_todo("a", false),
            make_todo("b", false),
            make_todo("c", false),
        ];
        let before_a = todos[0].clone();
        let before_c = todos[2].clone();

        mark_completed(&mut todos, "b");

        assert!(todos[1].is_completed);
        assert_eq!(todos[1].title, "Todo b");
        assert_eq!(todos[0], before_a);
        assert_eq!(todos[2], before_c);
    }

    #[test]
    fn test_mark_completed_unknown_id_is_noop() {
        let mut todos = vec![make_todo("a", false)];
        let before = todos.clone();

        mark_completed(&mut todos, "zzz");

        assert_eq!(todos, before);
    }

    #[test]
    fn test_replace_todo_by_id() {
        let mut todos = vec![make_todo("a", false), make_todo("b", false)];

        replace_todo(
            &mut todos,
            Todo {
                id: "b".to_string(),
                title: "Renamed".to_string(),
                is_completed: false,
            },
        );

        assert_eq!(todos[1].title, "Renamed");
        assert_eq!(todos[0].title, "Todo a");
    }
}
