//! UI Components
//!
//! Leptos components for the todo page.

mod todo_form;
mod todo_list;
mod todo_list_item;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
