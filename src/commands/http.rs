//! HTTP Helpers
//!
//! JSON requests with a fixed timeout, optional bearer token and sanitized
//! error bodies. Resource modules build paths; this module owns transport.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::AbortController;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Default request timeout (milliseconds)
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

pub(super) async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let response = send(Method::Get, path, None, token).await?;
    handle_json_response(response).await
}

/// Like [`get_json`] but maps 404 to `None`
pub(super) async fn get_optional_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<Option<T>, AppError> {
    let response = send(Method::Get, path, None, token).await?;
    if response.status() == 404 {
        return Ok(None);
    }
    handle_json_response(response).await.map(Some)
}

pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send(method, path, Some(payload), token).await?;
    handle_json_response(response).await
}

pub(super) async fn delete(path: &str, token: Option<&str>) -> Result<(), AppError> {
    let response = send(Method::Delete, path, None, token).await?;
    handle_empty_response(response).await
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send(
    method: Method,
    path: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<Response, AppError> {
    let url = build_url(&AppConfig::load().api_base_url, path);
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let mut builder = method.builder(&url).abort_signal(Some(&signal));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let request = match body {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(payload),
        None => builder.build(),
    }
    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    tracing::debug!(?method, %url, "sending request");
    request.send().await.map_err(map_request_error)
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "request failed");
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Collapses whitespace and truncates so raw HTML error pages stay readable.
fn sanitize_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return "No details provided.".to_string();
    }
    if collapsed.chars().count() > MAX_ERROR_CHARS {
        let truncated: String = collapsed.chars().take(MAX_ERROR_CHARS).collect();
        format!("{truncated}...")
    } else {
        collapsed
    }
}
