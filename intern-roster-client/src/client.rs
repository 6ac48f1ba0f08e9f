//! Roster API client

use std::collections::HashMap;

use crate::error::{ApiError, Result};
use crate::http::{execute_request, parse_json};
use crate::types::{FieldErrors, Intern, InternDraft};

/// Client for one roster API deployment.
///
/// Cheap to clone indirectly through [`reqwest::Client`]'s internal pooling;
/// callers typically hold it behind an `Arc` anyway.
pub struct InternApi {
    client: reqwest::Client,
    base_url: String,
}

impl InternApi {
    /// Create a client for the given base URL.
    ///
    /// The base URL is normalized to end with a slash so endpoint paths can
    /// be appended verbatim.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch the full roster.
    ///
    /// The returned order is whatever the API sent; no client-side sorting
    /// or transformation happens here.
    pub async fn list_interns(&self) -> Result<Vec<Intern>> {
        let url = self.url("interns");
        let (status, body) = execute_request(self.client.get(&url), "GET", &url).await?;
        if !success(status) {
            return Err(ApiError::Unexpected { status, body });
        }
        parse_json(&body)
    }

    /// Create a new intern record from a draft (the draft carries no id).
    pub async fn create_intern(&self, draft: &InternDraft) -> Result<Intern> {
        let url = self.url("newIntern");
        let (status, body) =
            execute_request(self.client.post(&url).json(draft), "POST", &url).await?;
        if !success(status) {
            return Err(rejection(status, body));
        }
        parse_json(&body)
    }

    /// Update the record addressed by `id` with the draft's fields.
    pub async fn update_intern(&self, id: i64, draft: &InternDraft) -> Result<Intern> {
        let url = self.url(&id.to_string());
        let (status, body) =
            execute_request(self.client.put(&url).json(draft), "PUT", &url).await?;
        if !success(status) {
            return Err(rejection(status, body));
        }
        parse_json(&body)
    }

    /// Delete the record addressed by `id`.
    ///
    /// The API answers with an empty body; a non-success status maps to
    /// [`ApiError::Unexpected`] and the caller decides whether that matters.
    pub async fn delete_intern(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("eraseIntern/{id}"));
        let (status, body) = execute_request(self.client.delete(&url), "DELETE", &url).await?;
        if !success(status) {
            return Err(ApiError::Unexpected { status, body });
        }
        Ok(())
    }
}

fn success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a non-success write response.
///
/// The backend answers rejected drafts with a flat `{field: message}` object.
/// Anything that doesn't parse as one is surfaced as `Unexpected`.
fn rejection(status: u16, body: String) -> ApiError {
    match serde_json::from_str::<HashMap<String, String>>(&body) {
        Ok(map) => {
            let errors = FieldErrors::from_map(&map);
            log::warn!("draft rejected (HTTP {status}): {errors:?}");
            ApiError::Rejected { errors }
        }
        Err(_) => ApiError::Unexpected { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let api = InternApi::new("http://localhost:8080");
        assert_eq!(api.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn base_url_keeps_existing_slash() {
        let api = InternApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn endpoint_urls_follow_the_api_shape() {
        let api = InternApi::new("https://api.example.com");
        assert_eq!(api.url("interns"), "https://api.example.com/interns");
        assert_eq!(api.url("newIntern"), "https://api.example.com/newIntern");
        assert_eq!(api.url("42"), "https://api.example.com/42");
        assert_eq!(
            api.url("eraseIntern/42"),
            "https://api.example.com/eraseIntern/42"
        );
    }

    #[test]
    fn rejection_maps_known_fields() {
        let body = r#"{"name":"Name must be at least 4 characters","general":"ignored"}"#;
        let result = rejection(400, body.to_string());
        assert!(
            matches!(
                &result,
                ApiError::Rejected { errors }
                    if errors.name.as_deref() == Some("Name must be at least 4 characters")
                        && errors.email.is_none()
                        && errors.department.is_none()
            ),
            "unexpected mapping: {result:?}"
        );
    }

    #[test]
    fn rejection_with_only_unknown_keys_is_still_a_rejection() {
        // Empty FieldErrors: no inline message is shown, the form stays put
        let body = r#"{"general":"something went wrong"}"#;
        let result = rejection(400, body.to_string());
        assert!(
            matches!(&result, ApiError::Rejected { errors } if errors.is_empty()),
            "unexpected mapping: {result:?}"
        );
    }

    #[test]
    fn non_json_body_is_unexpected() {
        let result = rejection(502, "<html>bad gateway</html>".to_string());
        assert!(
            matches!(&result, ApiError::Unexpected { status: 502, .. }),
            "unexpected mapping: {result:?}"
        );
    }
}
