//! Todo Lists App
//!
//! Root component: auth session, router and page layout.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::auth::AuthSessionProvider;
use crate::commands::RestApi;
use crate::components::{EditTodoList, HomePage, NavBar, NotFound};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        Rc::new(RestApi),
    ));

    view! {
        <AuthSessionProvider options=config.client_options()>
            <Router>
                <NavBar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/lists/:todo_list_id") view=EditTodoList />
                    </Routes>
                </main>
            </Router>
        </AuthSessionProvider>
    }
}
