//! Auth0 SPA Bindings
//!
//! Typed access to the Auth0 SPA JavaScript SDK.
//! The SDK bundle must be loaded on the page (it exposes the global
//! `createAuth0Client`) before [`Auth0Client::connect`] is called.
//!
//! Application code talks to the [`IdentityClient`] trait so the session
//! logic can run against a fake client in tests.

mod client;
mod types;

pub use client::Auth0Client;
pub use types::{
    CacheLocation, ClientOptions, IdTokenClaims, LoginOptions, LogoutOptions, RedirectResult,
    TokenOptions, UserProfile,
};

use async_trait::async_trait;

/// Result type for identity provider calls
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors raised by the identity provider or while converting its values
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The SDK rejected the call (login cancelled, popup blocked, consent required...)
    Sdk(String),
    /// A value could not be converted between Rust and JavaScript
    Conversion(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Sdk(msg) => write!(f, "Identity provider error: {}", msg),
            AuthError::Conversion(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Operations of an identity provider SPA client.
///
/// Every call may suspend on network or browser UI (popups, redirects).
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait IdentityClient {
    /// Finish a redirect login, consuming the authorization code in the URL
    async fn handle_redirect_callback(&self) -> AuthResult<RedirectResult>;

    /// Whether the client holds a valid session
    async fn is_authenticated(&self) -> AuthResult<bool>;

    /// Profile of the logged-in user, `None` when there is no session
    async fn get_user(&self) -> AuthResult<Option<UserProfile>>;

    /// Log in through a popup window
    async fn login_with_popup(&self, options: &LoginOptions) -> AuthResult<()>;

    /// Navigate the page to the identity provider's login screen
    async fn login_with_redirect(&self, options: &LoginOptions) -> AuthResult<()>;

    async fn get_id_token_claims(&self, options: &TokenOptions) -> AuthResult<Option<IdTokenClaims>>;

    /// Access token from cache or a hidden iframe
    async fn get_token_silently(&self, options: &TokenOptions) -> AuthResult<String>;

    /// Access token through a consent popup
    async fn get_tokens_with_popup(&self, options: &TokenOptions) -> AuthResult<String>;

    async fn logout(&self, options: &LogoutOptions) -> AuthResult<()>;
}

/// Whether a page query string carries a non-empty authorization code.
///
/// Accepts the query with or without its leading `?`.
pub fn has_authorization_code(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "code" && !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_code_parameter() {
        assert!(has_authorization_code("?code=abc&state=xyz"));
        assert!(has_authorization_code("state=xyz&code=abc"));
    }

    #[test]
    fn test_ignores_lookalike_parameters() {
        assert!(!has_authorization_code(""));
        assert!(!has_authorization_code("?"));
        assert!(!has_authorization_code("?error=login_required"));
        assert!(!has_authorization_code("?zipcode=12345"));
    }

    #[test]
    fn test_ignores_empty_code() {
        assert!(!has_authorization_code("?code="));
        assert!(!has_authorization_code("?code&state=xyz"));
        assert!(has_authorization_code("?code=&code=abc"));
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::Sdk("Popup closed".to_string());
        assert_eq!(err.to_string(), "Identity provider error: Popup closed");
    }
}
