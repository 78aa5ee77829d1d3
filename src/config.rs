//! Frontend Configuration
//!
//! Build-time values from `option_env!` with runtime overrides read from
//! `window.TODO_CONFIG`, so a static deployment can point at another API or
//! tenant without rebuilding. Everything here is public; no secrets.

use auth0_spa::{CacheLocation, ClientOptions};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Keys accepted in `window.TODO_CONFIG`
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const RUNTIME_KEYS: &[&str] = &[
    "api_base_url",
    "auth_domain",
    "auth_client_id",
    "auth_audience",
    "auth_redirect_uri",
    "log_level",
];

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_domain: String,
    pub auth_client_id: String,
    pub auth_audience: Option<String>,
    pub auth_redirect_uri: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            auth_domain: String::new(),
            auth_client_id: String::new(),
            auth_audience: None,
            auth_redirect_uri: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build-time values first, then whatever the page overrides
    pub fn load() -> Self {
        let build_env = [
            ("api_base_url", option_env!("TODO_API_BASE_URL")),
            ("auth_domain", option_env!("TODO_AUTH_DOMAIN")),
            ("auth_client_id", option_env!("TODO_AUTH_CLIENT_ID")),
            ("auth_audience", option_env!("TODO_AUTH_AUDIENCE")),
            ("auth_redirect_uri", option_env!("TODO_AUTH_REDIRECT_URI")),
            ("log_level", option_env!("TODO_LOG_LEVEL")),
        ];

        let mut config = Self::default();
        for (key, value) in build_env {
            if let Some(value) = value {
                config.set(key, value);
            }
        }
        for (key, value) in runtime_overrides() {
            config.set(key, &value);
        }
        config
    }

    /// Apply one setting; blank values and unknown keys are ignored
    fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let value = value.to_string();
        match key {
            "api_base_url" => self.api_base_url = value,
            "auth_domain" => self.auth_domain = value,
            "auth_client_id" => self.auth_client_id = value,
            "auth_audience" => self.auth_audience = Some(value),
            "auth_redirect_uri" => self.auth_redirect_uri = Some(value),
            "log_level" => self.log_level = value,
            _ => tracing::debug!(key, "ignoring unknown config key"),
        }
    }

    /// Options for the identity client. The redirect URI falls back to the page origin.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            domain: self.auth_domain.clone(),
            client_id: self.auth_client_id.clone(),
            redirect_uri: self.auth_redirect_uri.clone().or_else(page_origin),
            audience: self.auth_audience.clone(),
            scope: Some("openid profile email".to_string()),
            cache_location: Some(CacheLocation::Memory),
        }
    }
}

/// String values of `window.TODO_CONFIG` for the known keys
#[cfg(target_arch = "wasm32")]
fn runtime_overrides() -> Vec<(&'static str, String)> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let config = match Reflect::get(&window, &JsValue::from_str("TODO_CONFIG")) {
        Ok(config) if config.is_object() => config,
        _ => return Vec::new(),
    };

    RUNTIME_KEYS
        .iter()
        .filter_map(|key| {
            let value = Reflect::get(&config, &JsValue::from_str(key)).ok()?;
            Some((*key, value.as_string()?))
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_overrides() -> Vec<(&'static str, String)> {
    Vec::new()
}

/// Origin of the current page, e.g. `https://todo.example.com`
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}
