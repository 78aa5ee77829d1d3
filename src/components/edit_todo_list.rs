//! Edit Todo List Page
//!
//! Loads the list named by the route and wires the editor actions to it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::auth::use_auth;
use crate::components::spinner::Spinner;
use crate::components::todo_input::TodoInput;
use crate::components::todo_list::TodoList;
use crate::components::todo_list_name::TodoListName;
use crate::context::AppContext;
use crate::editor::{EditorView, ListEditor};
use crate::hooks::{use_todo_list_query, TodoHooks};
use crate::models::TodoItem;

#[derive(Params, Clone, Debug, PartialEq)]
struct TodoListParams {
    todo_list_id: Option<String>,
}

#[component]
pub fn EditTodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let hooks = TodoHooks::new(ctx, use_auth());

    let params = use_params::<TodoListParams>();
    let route_param = Signal::derive(move || {
        params
            .get()
            .ok()
            .and_then(|p| p.todo_list_id)
            .unwrap_or_default()
    });
    let query = use_todo_list_query(route_param);

    let editor = move || ListEditor::new(route_param.get_untracked(), hooks);

    let add_todo_item = Callback::new(move |item: TodoItem| {
        let editor = editor();
        spawn_local(async move {
            if let Err(err) = editor.add_todo_item(item).await {
                tracing::warn!(error = %err, "could not add item");
            }
        });
    });

    let set_todo_list_name = Callback::new(move |name: String| {
        let editor = editor();
        let loaded = query.with_untracked(|q| q.loaded().cloned());
        spawn_local(async move {
            if let Err(err) = editor.set_todo_list_name(loaded.as_ref(), &name).await {
                tracing::warn!(error = %err, "could not rename list");
            }
        });
    });

    let update_todo_item = Callback::new(move |item: TodoItem| {
        let editor = editor();
        spawn_local(async move {
            if let Err(err) = editor.update_todo_item(&item).await {
                tracing::warn!(error = %err, item_id = ?item.id, "could not update item");
            }
        });
    });

    let delete_todo_item = Callback::new(move |item: TodoItem| {
        let editor = editor();
        spawn_local(async move {
            if let Err(err) = editor.delete_todo_item(&item).await {
                tracing::warn!(error = %err, item_id = ?item.id, "could not delete item");
            }
        });
    });

    view! {
        <section class="edit-todo-list">
            <a href="/" class="back-link">"← All lists"</a>
            {move || match query.with(|q| q.view()) {
                EditorView::Loading => view! { <Spinner /> }.into_any(),
                EditorView::Content(list) => {
                    view! {
                        <TodoListName
                            todo_list_name=list.name
                            set_todo_list_name=set_todo_list_name
                        />
                        <TodoInput add_todo_item=add_todo_item />
                        <TodoList
                            todo_items=list.todo_items
                            update_todo_item=update_todo_item
                            delete_todo_item=delete_todo_item
                        />
                    }
                        .into_any()
                }
                EditorView::Failed(message) => {
                    view! { <p class="error-message" role="alert">{message}</p> }.into_any()
                }
                EditorView::Empty => ().into_any(),
            }}
        </section>
    }
}
