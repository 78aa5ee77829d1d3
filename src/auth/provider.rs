//! Auth Session Provider
//!
//! Leptos wiring for [`AuthSession`]: the provider mirrors session state into
//! a signal, starts initialization on mount, tears the session down on
//! cleanup and hands descendants a typed [`AuthContext`].

use std::rc::Rc;

use auth0_spa::{
    Auth0Client, ClientOptions, IdTokenClaims, IdentityClient, LoginOptions, LogoutOptions,
    TokenOptions, UserProfile,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use wasm_bindgen::JsValue;

use super::session::{AuthSession, SessionState};
use crate::errors::AppError;

/// Auth session handle shared through Leptos context
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<SessionState>,
    session: StoredValue<Rc<AuthSession>, LocalStorage>,
}

impl AuthContext {
    fn new(session: Rc<AuthSession>, state: RwSignal<SessionState>) -> Self {
        Self {
            state,
            session: StoredValue::new_local(session),
        }
    }

    /// A fresh session whose published state drives the context's signal
    pub(super) fn connected() -> (Self, Rc<AuthSession>) {
        let state = RwSignal::new(SessionState::default());
        let session = Rc::new(AuthSession::new(move |next: &SessionState| {
            state.set(next.clone());
        }));
        (Self::new(Rc::clone(&session), state), session)
    }

    /// Context used when no provider is mounted; every action fails
    fn detached() -> Self {
        let state = RwSignal::new(SessionState {
            loading: false,
            ..SessionState::default()
        });
        Self::new(Rc::new(AuthSession::new(|_| {})), state)
    }

    // ========================
    // Reactive getters
    // ========================

    pub fn is_authenticated(&self) -> Option<bool> {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn popup_open(&self) -> bool {
        self.state.with(|s| s.popup_open)
    }

    pub fn error(&self) -> Option<AppError> {
        self.state.with(|s| s.error.clone())
    }

    // ========================
    // Actions
    // ========================

    fn session(&self) -> Rc<AuthSession> {
        self.session.get_value()
    }

    pub async fn login_with_popup(&self, options: LoginOptions) -> Result<(), AppError> {
        self.session().login_with_popup(&options).await
    }

    pub async fn login_with_redirect(&self, options: LoginOptions) -> Result<(), AppError> {
        self.session().login_with_redirect(&options).await
    }

    pub async fn get_token_silently(&self, options: TokenOptions) -> Result<String, AppError> {
        self.session().get_token_silently(&options).await
    }

    pub async fn logout(&self, options: LogoutOptions) -> Result<(), AppError> {
        self.session().logout(&options).await
    }

    /// Access token for API calls; `None` when signed out or the token lookup fails
    pub async fn bearer_token(&self) -> Option<String> {
        if self.state.with_untracked(|s| s.is_authenticated) != Some(true) {
            return None;
        }
        match self.get_token_silently(TokenOptions::default()).await {
            Ok(token) => Some(token),
            Err(err) => {
                tracing::warn!(error = %err, "could not acquire access token");
                None
            }
        }
    }
}

// The pages use the login/logout half of the context; these are for
// descendants that need ID token claims, consent popups or manual redirects.
#[allow(dead_code)]
impl AuthContext {
    pub async fn handle_redirect_callback(&self) -> Result<(), AppError> {
        self.session().handle_redirect_callback().await
    }

    pub async fn get_id_token_claims(
        &self,
        options: TokenOptions,
    ) -> Result<Option<IdTokenClaims>, AppError> {
        self.session().get_id_token_claims(&options).await
    }

    pub async fn get_tokens_with_popup(&self, options: TokenOptions) -> Result<String, AppError> {
        self.session().get_tokens_with_popup(&options).await
    }
}

/// Provides the auth context and initializes the session once on mount.
///
/// Without `on_redirect_callback` the query string is stripped from the
/// address bar after a redirect login.
#[component]
pub fn AuthSessionProvider(
    #[prop(into)] options: ClientOptions,
    #[prop(optional, into)] on_redirect_callback: Option<Callback<Option<Value>>>,
    children: Children,
) -> impl IntoView {
    let (auth, session) = AuthContext::connected();
    provide_context(auth);

    let teardown = session.teardown_handle();
    on_cleanup(move || teardown.teardown());

    spawn_local(async move {
        let query = current_query();
        session
            .initialize(connect_client(options), &query, move |app_state| {
                match on_redirect_callback {
                    Some(callback) => callback.run(app_state),
                    None => strip_query_from_url(),
                }
            })
            .await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a detached fallback.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::detached)
}

async fn connect_client(options: ClientOptions) -> Result<Rc<dyn IdentityClient>, AppError> {
    let client: Rc<dyn IdentityClient> = Rc::new(Auth0Client::connect(&options).await?);
    Ok(client)
}

fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Replace the URL with its bare path, without reloading
fn strip_query_from_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let replaced = window.history().and_then(|history| {
        history.replace_state_with_url(&JsValue::from(js_sys::Object::new()), &title, Some(&path))
    });
    if let Err(err) = replaced {
        tracing::warn!(error = ?err, "could not clean up redirect URL");
    }
}
