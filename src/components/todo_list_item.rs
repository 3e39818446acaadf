//! Todo List Item Component
//!
//! One row: title plus a completion checkbox, with a transient inline
//! edit mode.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Todo;

/// A single todo row
#[component]
pub fn TodoListItem(
    todo: Todo,
    #[prop(into)] on_complete_todo: Callback<String>,
    #[prop(into)] on_update_todo: Callback<Todo>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(todo.title.clone());

    view! {
        <li class="todo-item">
            {move || {
                let todo = todo.clone();
                if editing.get() {
                    let save = {
                        let todo = todo.clone();
                        move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            let title = draft_title.get();
                            if title.is_empty() {
                                return;
                            }
                            on_update_todo.run(Todo {
                                title,
                                ..todo.clone()
                            });
                            set_editing.set(false);
                        }
                    };
                    view! {
                        <form class="todo-edit-form" on:submit=save>
                            <input
                                type="text"
                                prop:value=move || draft_title.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_draft_title.set(input.value());
                                }
                            />
                            <button type="submit">"Update"</button>
                            <button type="button" on:click=move |_| set_editing.set(false)>
                                "Cancel"
                            </button>
                        </form>
                    }
                    .into_any()
                } else {
                    let id = todo.id.clone();
                    let title = todo.title.clone();
                    let edit_title = todo.title.clone();
                    view! {
                        <div class="todo-row">
                            <label>
                                <input
                                    type="checkbox"
                                    checked=todo.is_completed
                                    on:change=move |_| on_complete_todo.run(id.clone())
                                />
                                <span class="todo-title">{title}</span>
                            </label>
                            <button
                                type="button"
                                class="edit-btn"
                                on:click=move |_| {
                                    set_draft_title.set(edit_title.clone());
                                    set_editing.set(true);
                                }
                            >
                                "Edit"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </li>
    }
}
