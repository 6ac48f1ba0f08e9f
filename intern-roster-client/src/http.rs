//! Shared HTTP request execution
//!
//! One place for sending requests, logging, and reading responses, so the
//! endpoint methods on [`InternApi`](crate::InternApi) stay declarative.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Maximum number of bytes of a response body to include in debug logs.
const TRUNCATE_LIMIT: usize = 256;

/// Perform an HTTP request and return `(status_code, response_text)`.
///
/// Network and timeout failures map to the matching [`ApiError`] variants;
/// status-code interpretation is left to the caller.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    url: &str,
) -> Result<(u16, String)> {
    log::debug!("{method} {url}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("Response Status: {status_code}");

    let response_text = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("Response Body: {}", truncate_for_log(&response_text));

    Ok((status_code, response_text))
}

/// Parse a JSON response body into `T`.
pub(crate) fn parse_json<T>(response_text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Truncate a string for log output.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        let mut end = TRUNCATE_LIMIT;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "x".repeat(TRUNCATE_LIMIT + 50);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.len() < s.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "é".repeat(TRUNCATE_LIMIT);
        let result = truncate_for_log(&s);
        assert!(result.contains("truncated"));
    }
}
