//! Auth0 SPA JS Client
//!
//! wasm-bindgen imports of the SDK global and the [`IdentityClient`]
//! implementation on top of them. Every SDK method returns a Promise.

use async_trait::async_trait;
use js_sys::{Promise, Reflect};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{
    AuthError, AuthResult, ClientOptions, IdTokenClaims, IdentityClient, LoginOptions,
    LogoutOptions, RedirectResult, TokenOptions, UserProfile,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Auth0Client)]
    type JsAuth0Client;

    #[wasm_bindgen(catch, js_name = createAuth0Client)]
    fn create_auth0_client(options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = handleRedirectCallback)]
    fn handle_redirect_callback(this: &JsAuth0Client) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = isAuthenticated)]
    fn is_authenticated(this: &JsAuth0Client) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getUser)]
    fn get_user(this: &JsAuth0Client) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = loginWithPopup)]
    fn login_with_popup(this: &JsAuth0Client, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = loginWithRedirect)]
    fn login_with_redirect(this: &JsAuth0Client, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getIdTokenClaims)]
    fn get_id_token_claims(this: &JsAuth0Client, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getTokenSilently)]
    fn get_token_silently(this: &JsAuth0Client, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getTokenWithPopup)]
    fn get_token_with_popup(this: &JsAuth0Client, options: &JsValue) -> Result<Promise, JsValue>;

    // Synchronous in the SDK: it navigates away.
    #[wasm_bindgen(method, catch)]
    fn logout(this: &JsAuth0Client, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Client backed by the Auth0 SPA SDK loaded on the page
pub struct Auth0Client {
    inner: JsAuth0Client,
}

impl Auth0Client {
    /// Create the SDK client; the SDK also checks for an existing session here
    pub async fn connect(options: &ClientOptions) -> AuthResult<Self> {
        let js_options = to_js(options)?;
        let inner = settle(create_auth0_client(&js_options)).await?;
        Ok(Self {
            inner: inner.unchecked_into(),
        })
    }
}

#[async_trait(?Send)]
impl IdentityClient for Auth0Client {
    async fn handle_redirect_callback(&self) -> AuthResult<RedirectResult> {
        let result = settle(self.inner.handle_redirect_callback()).await?;
        from_js(result)
    }

    async fn is_authenticated(&self) -> AuthResult<bool> {
        let result = settle(self.inner.is_authenticated()).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    async fn get_user(&self) -> AuthResult<Option<UserProfile>> {
        let result = settle(self.inner.get_user()).await?;
        from_js(result)
    }

    async fn login_with_popup(&self, options: &LoginOptions) -> AuthResult<()> {
        let js_options = to_js(options)?;
        settle(self.inner.login_with_popup(&js_options)).await?;
        Ok(())
    }

    async fn login_with_redirect(&self, options: &LoginOptions) -> AuthResult<()> {
        let js_options = to_js(options)?;
        settle(self.inner.login_with_redirect(&js_options)).await?;
        Ok(())
    }

    async fn get_id_token_claims(&self, options: &TokenOptions) -> AuthResult<Option<IdTokenClaims>> {
        let js_options = to_js(options)?;
        let result = settle(self.inner.get_id_token_claims(&js_options)).await?;
        from_js(result)
    }

    async fn get_token_silently(&self, options: &TokenOptions) -> AuthResult<String> {
        let js_options = to_js(options)?;
        let result = settle(self.inner.get_token_silently(&js_options)).await?;
        from_js(result)
    }

    async fn get_tokens_with_popup(&self, options: &TokenOptions) -> AuthResult<String> {
        let js_options = to_js(options)?;
        let result = settle(self.inner.get_token_with_popup(&js_options)).await?;
        from_js(result)
    }

    async fn logout(&self, options: &LogoutOptions) -> AuthResult<()> {
        let js_options = to_js(options)?;
        self.inner.logout(&js_options).map_err(js_error)?;
        Ok(())
    }
}

// ========================
// Conversion Helpers
// ========================

async fn settle(promise: Result<Promise, JsValue>) -> AuthResult<JsValue> {
    let promise = promise.map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)
}

fn to_js<T: Serialize>(value: &T) -> AuthResult<JsValue> {
    // Plain objects instead of `Map`s for nested JSON values such as `appState`
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AuthError::Conversion(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> AuthResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| AuthError::Conversion(e.to_string()))
}

/// SDK errors carry `error_description`; plain JS errors carry `message`
fn js_error(value: JsValue) -> AuthError {
    if value.is_object() {
        for key in ["error_description", "message", "error"] {
            let text = Reflect::get(&value, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string());
            if let Some(text) = text {
                return AuthError::Sdk(text);
            }
        }
    }
    AuthError::Sdk(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
