//! Todo List Item Component
//!
//! One row: completion checkbox, editable description, delete button that
//! asks for confirmation inline.

use leptos::prelude::*;

use crate::components::inline_edit::InlineEdit;
use crate::models::TodoItem;

/// Accessible name of a row's delete button
fn delete_label(item: &TodoItem) -> String {
    format!("Delete \"{}\"", item.description)
}

#[component]
pub fn TodoListItem(
    item: TodoItem,
    update_todo_item: Callback<TodoItem>,
    delete_todo_item: Callback<TodoItem>,
) -> impl IntoView {
    let is_complete = item.is_complete;
    let description = item.description.clone();
    let label = delete_label(&item);
    let item = StoredValue::new(item);
    let (confirming, set_confirming) = signal(false);

    let describe = Callback::new(move |description: String| {
        update_todo_item.run(TodoItem {
            description,
            ..item.get_value()
        });
    });

    view! {
        <li class=if is_complete { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                aria-label="Complete"
                prop:checked=is_complete
                on:change=move |_| update_todo_item.run(item.get_value().toggled())
            />
            <InlineEdit value=description on_commit=describe class="todo-item-text" />
            <Show
                when=move || confirming.get()
                fallback=move || {
                    view! {
                        <button
                            class="delete-btn"
                            aria-label=label.clone()
                            on:click=move |_| set_confirming.set(true)
                        >
                            "×"
                        </button>
                    }
                }
            >
                <span class="delete-confirm" role="group">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            set_confirming.set(false);
                            delete_todo_item.run(item.get_value());
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                        "No"
                    </button>
                </span>
            </Show>
        </li>
    }
}
