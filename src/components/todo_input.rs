//! Todo Input Component
//!
//! Form for adding a new item to the current list.

use leptos::prelude::*;

use crate::models::TodoItem;

/// Draft item for the typed text; `None` when there is nothing to add
fn new_todo(text: &str) -> Option<TodoItem> {
    let description = text.trim();
    (!description.is_empty()).then(|| TodoItem::draft(description))
}

#[component]
pub fn TodoInput(#[prop(into)] add_todo_item: Callback<TodoItem>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = new_todo(&new_text.get()) else {
            return;
        };
        add_todo_item.run(item);
        set_new_text.set(String::new());
    };

    view! {
        <form class="todo-input" on:submit=submit>
            <input
                type="text"
                placeholder="Add a to-do..."
                aria-label="New to-do"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
