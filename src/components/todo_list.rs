//! Todo List Component
//!
//! Renders the uncompleted todos in collection order, or the empty-state
//! message. Stateless; completion and edit intents go up through
//! callbacks.

use leptos::prelude::*;

use crate::components::TodoListItem;
use crate::models::{incomplete_todos, Todo};

/// List of uncompleted todos
#[component]
pub fn TodoList(
    todo_list: ReadSignal<Vec<Todo>>,
    #[prop(into)] on_complete_todo: Callback<String>,
    #[prop(into)] on_update_todo: Callback<Todo>,
) -> impl IntoView {
    let visible = move || incomplete_todos(&todo_list.get());

    view! {
        <Show
            when=move || !visible().is_empty()
            fallback=|| view! { <p class="empty-message">"Add todo above to get started"</p> }
        >
            <ul class="todo-list">
                <For
                    each=visible
                    key=|todo| (todo.id.clone(), todo.title.clone())
                    children=move |todo| {
                        view! {
                            <TodoListItem
                                todo=todo
                                on_complete_todo=on_complete_todo
                                on_update_todo=on_update_todo
                            />
                        }
                    }
                />
            </ul>
        </Show>
    }
}
