//! REST calls via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` and decide what to log; nothing here touches the DOM.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;

use crate::error::EnhanceError;

fn status_error(endpoint: &str, status: u16) -> EnhanceError {
    EnhanceError::Status {
        endpoint: endpoint.to_owned(),
        status,
    }
}

/// Fetch a random name from `endpoint` as raw response text.
///
/// The body may still be wrapped in quotes; see
/// [`crate::name_fetch::strip_quotes`].
///
/// # Errors
///
/// Returns [`EnhanceError::Http`] when the request or body read fails and
/// [`EnhanceError::Status`] for a non-2xx answer.
pub async fn fetch_random_name(endpoint: &str) -> Result<String, EnhanceError> {
    let resp = Request::get(endpoint).send().await?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(status_error(endpoint, status));
    }
    Ok(resp.text().await?)
}
