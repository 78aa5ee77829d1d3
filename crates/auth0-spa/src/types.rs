//! SDK Option and Result Types
//!
//! Field names follow the SDK's JavaScript option objects, which mix
//! snake_case (`client_id`, `redirect_uri`) and camelCase (`appState`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where the SDK caches tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheLocation {
    Memory,
    LocalStorage,
}

/// Options for `createAuth0Client`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientOptions {
    pub domain: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(rename = "cacheLocation", skip_serializing_if = "Option::is_none")]
    pub cache_location: Option<CacheLocation>,
}

/// Options for popup and redirect logins
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Round-tripped through the redirect and handed back in [`RedirectResult`]
    #[serde(rename = "appState", skip_serializing_if = "Option::is_none")]
    pub app_state: Option<Value>,
}

/// Options for token and claims lookups
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(rename = "ignoreCache", skip_serializing_if = "std::ops::Not::not")]
    pub ignore_cache: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogoutOptions {
    #[serde(rename = "returnTo", skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub federated: bool,
}

/// Outcome of `handleRedirectCallback`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RedirectResult {
    #[serde(rename = "appState", default)]
    pub app_state: Option<Value>,
}

/// OIDC user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Custom claims and anything else the provider sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Best human-readable name: name, then nickname, email, subject
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.nickname.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}

/// Decoded ID token claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// The encoded ID token
    #[serde(rename = "__raw", default)]
    pub raw: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_options_skip_unset_fields() {
        let options = ClientOptions {
            domain: "tenant.eu.auth0.com".to_string(),
            client_id: "abc".to_string(),
            cache_location: Some(CacheLocation::LocalStorage),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "domain": "tenant.eu.auth0.com",
                "client_id": "abc",
                "cacheLocation": "localstorage",
            })
        );
    }

    #[test]
    fn test_login_options_use_sdk_names() {
        let options = LoginOptions {
            redirect_uri: Some("http://localhost:8080".to_string()),
            app_state: Some(json!({ "targetUrl": "/lists/3" })),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["redirect_uri"], "http://localhost:8080");
        assert_eq!(value["appState"]["targetUrl"], "/lists/3");
        assert!(value.get("prompt").is_none());
    }

    #[test]
    fn test_boolean_flags_only_sent_when_set() {
        let value = serde_json::to_value(&TokenOptions::default()).unwrap();
        assert_eq!(value, json!({}));

        let value = serde_json::to_value(&LogoutOptions {
            federated: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value, json!({ "federated": true }));
    }

    #[test]
    fn test_redirect_result_without_app_state() {
        let result: RedirectResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.app_state, None);
    }

    #[test]
    fn test_user_profile_keeps_custom_claims() {
        let profile: UserProfile = serde_json::from_value(json!({
            "sub": "auth0|42",
            "nickname": "ada",
            "https://example.com/roles": ["admin"],
        }))
        .unwrap();
        assert_eq!(profile.sub, "auth0|42");
        assert_eq!(profile.display_name(), "ada");
        assert_eq!(profile.extra["https://example.com/roles"], json!(["admin"]));
    }

    #[test]
    fn test_display_name_falls_back_to_subject() {
        let profile = UserProfile {
            sub: "auth0|7".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "auth0|7");
    }

    #[test]
    fn test_id_token_claims_split_raw_token() {
        let claims: IdTokenClaims = serde_json::from_value(json!({
            "__raw": "eyJhbGciOi...",
            "sub": "auth0|42",
            "email": "ada@example.com",
        }))
        .unwrap();
        assert_eq!(claims.raw, "eyJhbGciOi...");
        assert_eq!(claims.profile.email.as_deref(), Some("ada@example.com"));
    }
}
