//! Test support: an identity client with a fixed answer and helpers that
//! drive an `AuthContext` through initialization.

use std::rc::Rc;

use async_trait::async_trait;
use auth0_spa::{
    AuthError, AuthResult, IdTokenClaims, IdentityClient, LoginOptions, LogoutOptions,
    RedirectResult, TokenOptions, UserProfile,
};

use super::provider::AuthContext;
use super::session::AuthSession;
use crate::errors::AppError;

pub(crate) const STUB_TOKEN: &str = "stub-access-token";

/// Signed in or not, depending on `authenticated`; hands out `STUB_TOKEN`
pub(crate) struct StubClient {
    pub authenticated: bool,
}

#[async_trait(?Send)]
impl IdentityClient for StubClient {
    async fn handle_redirect_callback(&self) -> AuthResult<RedirectResult> {
        Ok(RedirectResult::default())
    }

    async fn is_authenticated(&self) -> AuthResult<bool> {
        Ok(self.authenticated)
    }

    async fn get_user(&self) -> AuthResult<Option<UserProfile>> {
        Ok(None)
    }

    async fn login_with_popup(&self, _options: &LoginOptions) -> AuthResult<()> {
        Ok(())
    }

    async fn login_with_redirect(&self, _options: &LoginOptions) -> AuthResult<()> {
        Ok(())
    }

    async fn get_id_token_claims(
        &self,
        _options: &TokenOptions,
    ) -> AuthResult<Option<IdTokenClaims>> {
        Ok(None)
    }

    async fn get_token_silently(&self, _options: &TokenOptions) -> AuthResult<String> {
        if self.authenticated {
            Ok(STUB_TOKEN.to_string())
        } else {
            Err(AuthError::Sdk("login_required".to_string()))
        }
    }

    async fn get_tokens_with_popup(&self, _options: &TokenOptions) -> AuthResult<String> {
        Ok(STUB_TOKEN.to_string())
    }

    async fn logout(&self, _options: &LogoutOptions) -> AuthResult<()> {
        Ok(())
    }
}

/// Context whose session is still initializing (`loading == true`).
/// Must be called inside a reactive `Owner`.
pub(crate) fn initializing_auth() -> (AuthContext, Rc<AuthSession>) {
    AuthContext::connected()
}

/// Finish initialization against a `StubClient`
pub(crate) async fn settle(session: &AuthSession, authenticated: bool) {
    let client: Rc<dyn IdentityClient> = Rc::new(StubClient { authenticated });
    session
        .initialize(async { Ok::<_, AppError>(client) }, "", |_| {})
        .await;
}

/// Context that has finished initializing
pub(crate) async fn settled_auth(authenticated: bool) -> AuthContext {
    let (auth, session) = initializing_auth();
    settle(&session, authenticated).await;
    auth
}
