//! Todo List Component

use leptos::prelude::*;

use crate::components::todo_list_item::TodoListItem;
use crate::models::TodoItem;

/// Items in the order the server returned them, keyed by id
#[component]
pub fn TodoList(
    todo_items: Vec<TodoItem>,
    #[prop(into)] update_todo_item: Callback<TodoItem>,
    #[prop(into)] delete_todo_item: Callback<TodoItem>,
) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || todo_items.clone()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <TodoListItem
                            item=item
                            update_todo_item=update_todo_item
                            delete_todo_item=delete_todo_item
                        />
                    }
                }
            />
        </ul>
    }
}
