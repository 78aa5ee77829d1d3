//! Home Page
//!
//! Overview of the signed-in user's lists.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::spinner::Spinner;
use crate::hooks::use_todo_lists_query;
use crate::models::TodoList;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let lists = use_todo_lists_query();

    view! {
        <section class="home">
            <h1>"Todo Lists"</h1>
            {move || {
                if auth.loading() {
                    return view! { <Spinner /> }.into_any();
                }
                if auth.is_authenticated() != Some(true) {
                    return view! { <p class="hint">"Log in to see your lists."</p> }.into_any();
                }
                match lists.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(Ok(lists)) if lists.is_empty() => {
                        view! { <p class="hint">"No lists yet."</p> }.into_any()
                    }
                    Some(Ok(lists)) => {
                        view! {
                            <ul class="todo-lists">
                                {lists.into_iter().map(list_link).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <p class="error-message" role="alert">{err.to_string()}</p> }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}

fn list_link(list: TodoList) -> impl IntoView {
    let remaining = list.todo_items.iter().filter(|i| !i.is_complete).count();
    let href = format!("/lists/{}", list.id);
    view! {
        <li>
            <a href=href>{list.name}</a>
            <span class="item-count">{format!("{} open", remaining)}</span>
        </li>
    }
}
