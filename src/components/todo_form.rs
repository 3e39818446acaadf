//! Todo Form Component
//!
//! Entry form holding the draft title. Submission is disabled while a
//! save is in flight.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for creating new todos
#[component]
pub fn TodoForm(
    is_saving: ReadSignal<bool>,
    #[prop(into)] on_add_todo: Callback<String>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = draft.get();
        if title.is_empty() {
            return;
        }
        on_add_todo.run(title);
        set_draft.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit" disabled=move || is_saving.get()>
                {move || if is_saving.get() { "Saving..." } else { "Add Todo" }}
            </button>
        </form>
    }
}
