//! HTTP helper functions for Crux Core
//!
//! Every device response is classified here, in one place, into
//! `Result<T, RequestError>`. Handlers decide afterwards whether a failure is
//! logged only (status polls) or surfaced to the operator (actions).

use crux_http::Response;

use crate::error::RequestError;

/// Base URL for device endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The browser shell strips this prefix before calling `fetch()`, so requests
/// go to the same origin that served the page.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_portal_core::http_helpers::build_url;
/// let url = build_url("/status");
/// assert_eq!(url, "https://relative/status");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Maps a non-2xx response to `RequestError::Rejected`.
pub fn rejection(response: &Response<Vec<u8>>) -> RequestError {
    RequestError::Rejected {
        status: u16::from(response.status()),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, RequestError> {
    if !is_response_success(response) {
        return Err(rejection(response));
    }

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| RequestError::Malformed(format!("{action}: {e}"))),
        None => Err(RequestError::Malformed(format!("{action}: Empty response body"))),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(response: &Response<Vec<u8>>) -> Result<(), RequestError> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(rejection(response))
    }
}

/// Classifies a `crux_http` error.
///
/// `crux_http` reports non-2xx responses as `HttpError::Http`, so those are
/// rejections by the device; everything else never produced a response.
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> RequestError {
    match error {
        crux_http::HttpError::Http { code, .. } => RequestError::Rejected {
            status: u16::from(code),
        },
        other => RequestError::Transport(format!("{action}: {other}")),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), RequestError> {
    match result {
        Ok(response) => check_response_status(&response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, RequestError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

// Note: `crux_http::Response` has a private constructor, so these helpers are
// exercised through the handlers that resolve real HTTP effects in their tests.
