//! Todo Sync App
//!
//! Root component. Owns the todo collection and the loading/saving/error
//! flags, and orchestrates the two remote calls (load on mount, create on
//! submit). Completion and edits are local-only mutations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TodoForm, TodoList};
use crate::config::TableConfig;
use crate::models::{self, Todo};

#[component]
pub fn App() -> impl IntoView {
    // A missing env var surfaces through the same error slot as a failed
    // request, before any fetch is attempted.
    let (config, startup_error) = match TableConfig::from_env() {
        Ok(config) => (Some(config), None),
        Err(e) => (None, Some(e.to_string())),
    };

    // State. The loading flag starts raised whenever a mount load is
    // about to run, so the placeholder shows from the first frame.
    let (todo_list, set_todo_list) = signal(Vec::<Todo>::new());
    let (is_loading, set_is_loading) = signal(initially_loading(config));
    let (is_saving, set_is_saving) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(startup_error);

    // Load todos on mount
    Effect::new(move |_| {
        let Some(config) = config else { return };
        set_is_loading.set(true);
        spawn_local(async move {
            let settled = api::settle(api::fetch_todos(&config).await);
            if let Some(todos) = settled.value {
                web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                set_todo_list.set(todos);
            }
            if let Some(message) = settled.error_message {
                web_sys::console::error_1(&format!("[APP] Load failed: {}", message).into());
                set_error_message.set(Some(message));
            }
            set_is_loading.set(settled.in_flight);
        });
    });

    // Note: nothing guards against a double submit racing two creates;
    // the disabled button while saving is the only barrier.
    let add_todo = move |title: String| {
        let Some(config) = config else { return };
        set_is_saving.set(true);
        spawn_local(async move {
            let settled = api::settle(api::create_todo(&config, &title).await);
            if let Some(todo) = settled.value {
                set_todo_list.update(|todos| todos.insert(0, todo));
            }
            if let Some(message) = settled.error_message {
                web_sys::console::error_1(&format!("[APP] Create failed: {}", message).into());
                set_error_message.set(Some(message));
            }
            set_is_saving.set(settled.in_flight);
        });
    };

    // Local-only: the remote record is not told about completion.
    let complete_todo = move |id: String| {
        set_todo_list.update(|todos| models::mark_completed(todos, &id));
    };

    let update_todo = move |edited: Todo| {
        set_todo_list.update(|todos| models::replace_todo(todos, edited));
    };

    view! {
        <div class="app-layout">
            <h1>"My Todos"</h1>

            <TodoForm is_saving=is_saving on_add_todo=add_todo />

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="loading-message">"Todo list loading..."</p> }
            >
                <TodoList
                    todo_list=todo_list
                    on_complete_todo=complete_todo
                    on_update_todo=update_todo
                />
            </Show>

            {move || {
                error_message.get().map(|message| {
                    view! {
                        <div class="error-banner">
                            <hr />
                            <p>{message}</p>
                            <button type="button" on:click=move |_| set_error_message.set(None)>
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Whether the first frame shows the loading placeholder: true exactly
/// when a mount load is about to run
fn initially_loading(config: Option<TableConfig>) -> bool {
    config.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_loads_when_configured() {
        let config = TableConfig {
            token: "pat123",
            base_id: "appXYZ",
            table_id: "tblTodos",
        };
        assert!(initially_loading(Some(config)));
    }

    #[test]
    fn test_no_loading_placeholder_without_config() {
        assert!(!initially_loading(None));
    }
}
