//! Auth Session
//!
//! The authentication state machine behind `AuthSessionProvider`.
//! It owns the identity client once connected, publishes every state change
//! to a listener, and stops publishing after `teardown()` so continuations
//! that finish late cannot touch an unmounted tree.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use auth0_spa::{
    has_authorization_code, IdTokenClaims, IdentityClient, LoginOptions, LogoutOptions,
    TokenOptions, UserProfile,
};
use serde_json::Value;

use crate::errors::AppError;

/// Published session state
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// `None` until the provider has asked the identity client
    pub is_authenticated: Option<bool>,
    pub user: Option<UserProfile>,
    /// True until initialization settles, and during a redirect callback
    pub loading: bool,
    pub popup_open: bool,
    /// Last initialization or login failure
    pub error: Option<AppError>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: None,
            user: None,
            loading: true,
            popup_open: false,
            error: None,
        }
    }
}

/// Ends a session's lifetime from outside the session (component cleanup).
/// Moved into `on_cleanup`, whose closure must be `Send + Sync`.
#[derive(Clone, Debug)]
pub struct TeardownHandle {
    alive: Arc<AtomicBool>,
}

impl TeardownHandle {
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

type Listener = Box<dyn Fn(&SessionState)>;

pub struct AuthSession {
    client: RefCell<Option<Rc<dyn IdentityClient>>>,
    state: RefCell<SessionState>,
    alive: Arc<AtomicBool>,
    listener: Listener,
}

impl AuthSession {
    pub fn new(listener: impl Fn(&SessionState) + 'static) -> Self {
        Self {
            client: RefCell::new(None),
            state: RefCell::new(SessionState::default()),
            alive: Arc::new(AtomicBool::new(true)),
            listener: Box::new(listener),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Connect the client, finish a pending redirect, then load the session.
    ///
    /// `query` is the page's query string; when it carries an authorization
    /// code the redirect is completed and its app state handed to
    /// `on_redirect`. Failures land in `SessionState::error`; `loading` ends
    /// up false either way.
    pub async fn initialize<Fut, F>(&self, connect: Fut, query: &str, on_redirect: F)
    where
        Fut: Future<Output = Result<Rc<dyn IdentityClient>, AppError>>,
        F: FnOnce(Option<Value>),
    {
        match self.run_initialization(connect, query, on_redirect).await {
            Ok(()) => tracing::info!("auth session initialized"),
            Err(AppError::Cancelled) => {
                tracing::debug!("auth session torn down during initialization");
            }
            Err(err) => {
                tracing::warn!(error = %err, "auth initialization failed");
                self.update(|state| state.error = Some(err));
            }
        }
        self.update(|state| state.loading = false);
    }

    async fn run_initialization<Fut, F>(
        &self,
        connect: Fut,
        query: &str,
        on_redirect: F,
    ) -> Result<(), AppError>
    where
        Fut: Future<Output = Result<Rc<dyn IdentityClient>, AppError>>,
        F: FnOnce(Option<Value>),
    {
        let client = connect.await?;
        self.ensure_alive()?;
        self.client.replace(Some(Rc::clone(&client)));

        if has_authorization_code(query) {
            let result = client.handle_redirect_callback().await?;
            self.ensure_alive()?;
            on_redirect(result.app_state);
        }

        let authenticated = client.is_authenticated().await?;
        self.ensure_alive()?;
        self.update(|state| state.is_authenticated = Some(authenticated));

        if authenticated {
            let user = client.get_user().await?;
            self.ensure_alive()?;
            self.update(|state| state.user = user);
        }
        Ok(())
    }

    /// Popup login. A failed popup is logged and recorded, then the user is
    /// fetched and the session marked authenticated regardless.
    pub async fn login_with_popup(&self, options: &LoginOptions) -> Result<(), AppError> {
        let client = self.client()?;
        {
            let _popup = PopupGuard::open(self);
            match client.login_with_popup(options).await {
                Ok(()) => self.update(|state| state.error = None),
                Err(err) => {
                    tracing::error!(error = %err, "popup login failed");
                    self.update(|state| state.error = Some(err.into()));
                }
            }
        }
        self.ensure_alive()?;

        let user = client.get_user().await?;
        self.ensure_alive()?;
        self.update(|state| {
            state.user = user;
            state.is_authenticated = Some(true);
        });
        Ok(())
    }

    /// Finish a redirect login started elsewhere, with `loading` raised meanwhile
    pub async fn handle_redirect_callback(&self) -> Result<(), AppError> {
        let client = self.client()?;
        self.update(|state| state.loading = true);

        let outcome = self.complete_redirect(client.as_ref()).await;
        if let Err(err) = &outcome {
            if *err != AppError::Cancelled {
                tracing::warn!(error = %err, "redirect callback failed");
                let err = err.clone();
                self.update(|state| {
                    state.loading = false;
                    state.error = Some(err);
                });
            }
        }
        outcome
    }

    async fn complete_redirect(&self, client: &dyn IdentityClient) -> Result<(), AppError> {
        client.handle_redirect_callback().await?;
        self.ensure_alive()?;
        let user = client.get_user().await?;
        self.ensure_alive()?;
        self.update(|state| {
            state.loading = false;
            state.is_authenticated = Some(true);
            state.user = user;
            state.error = None;
        });
        Ok(())
    }

    // ========================
    // Pass-through actions
    // ========================

    pub async fn get_id_token_claims(
        &self,
        options: &TokenOptions,
    ) -> Result<Option<IdTokenClaims>, AppError> {
        Ok(self.client()?.get_id_token_claims(options).await?)
    }

    pub async fn login_with_redirect(&self, options: &LoginOptions) -> Result<(), AppError> {
        Ok(self.client()?.login_with_redirect(options).await?)
    }

    pub async fn get_token_silently(&self, options: &TokenOptions) -> Result<String, AppError> {
        Ok(self.client()?.get_token_silently(options).await?)
    }

    pub async fn get_tokens_with_popup(&self, options: &TokenOptions) -> Result<String, AppError> {
        Ok(self.client()?.get_tokens_with_popup(options).await?)
    }

    pub async fn logout(&self, options: &LogoutOptions) -> Result<(), AppError> {
        Ok(self.client()?.logout(options).await?)
    }

    // ========================
    // Internals
    // ========================

    fn client(&self) -> Result<Rc<dyn IdentityClient>, AppError> {
        self.client
            .borrow()
            .clone()
            .ok_or_else(|| AppError::Auth("Identity client is not initialized.".to_string()))
    }

    fn ensure_alive(&self) -> Result<(), AppError> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(AppError::Cancelled)
        }
    }

    /// Apply a change and publish it; a no-op once torn down
    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        if !self.is_alive() {
            tracing::debug!("auth session torn down; dropping state update");
            return;
        }
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        (self.listener)(&snapshot);
    }
}

/// Holds `popup_open` up for the duration of a popup login
struct PopupGuard<'a> {
    session: &'a AuthSession,
}

impl<'a> PopupGuard<'a> {
    fn open(session: &'a AuthSession) -> Self {
        session.update(|state| state.popup_open = true);
        Self { session }
    }
}

impl Drop for PopupGuard<'_> {
    fn drop(&mut self) {
        self.session.update(|state| state.popup_open = false);
    }
}
