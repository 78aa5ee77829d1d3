//! Todo List Name Component

use leptos::prelude::*;

use crate::components::inline_edit::InlineEdit;

/// List heading; click to rename
#[component]
pub fn TodoListName(
    #[prop(into)] todo_list_name: String,
    #[prop(into)] set_todo_list_name: Callback<String>,
) -> impl IntoView {
    view! {
        <h1 class="todo-list-name">
            <InlineEdit value=todo_list_name on_commit=set_todo_list_name />
        </h1>
    }
}
