//! Nav Bar Component
//!
//! Login and logout controls plus the signed-in user's name.

use auth0_spa::{LoginOptions, LogoutOptions};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::config::page_origin;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();

    let login_with_redirect = move |_| {
        spawn_local(async move {
            if let Err(err) = auth.login_with_redirect(LoginOptions::default()).await {
                tracing::warn!(error = %err, "redirect login failed");
            }
        });
    };

    let login_with_popup = move |_| {
        spawn_local(async move {
            if let Err(err) = auth.login_with_popup(LoginOptions::default()).await {
                tracing::warn!(error = %err, "popup login failed");
            }
        });
    };

    let logout = move |_| {
        let options = LogoutOptions {
            return_to: page_origin(),
            ..LogoutOptions::default()
        };
        spawn_local(async move {
            if let Err(err) = auth.logout(options).await {
                tracing::warn!(error = %err, "logout failed");
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="brand">"Todo Lists"</a>
            <div class="nav-actions">
                {move || {
                    if auth.loading() {
                        return ().into_any();
                    }
                    match (auth.is_authenticated(), auth.user()) {
                        (Some(true), user) => {
                            let name = user
                                .as_ref()
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_default();
                            view! {
                                <span class="user-name">{name}</span>
                                <button on:click=logout>"Log out"</button>
                            }
                                .into_any()
                        }
                        _ => {
                            view! {
                                <button on:click=login_with_redirect>"Log in"</button>
                                <button
                                    prop:disabled=move || auth.popup_open()
                                    on:click=login_with_popup
                                >
                                    "Log in with popup"
                                </button>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
            {move || {
                auth.error()
                    .map(|err| view! { <p class="auth-error" role="alert">{err.to_string()}</p> })
            }}
        </nav>
    }
}
