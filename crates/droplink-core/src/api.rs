//! Upload endpoint client
//!
//! One POST, multipart body with exactly two fields (`qr_required` and
//! `content`), and a discriminated JSON answer: `{"success": true,
//! "short_url": ..., "qr_code_data": ...}` or `{"success": false,
//! "error": ...}`. The server decides the `content` branch by whether the
//! part carries a file name, so the file part always sets one.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::{SubmitError, SubmitResult};
use crate::links::{join_endpoint, UPLOAD_PATH};
use crate::submit::SubmitContent;

/// A short link the server created for us.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    /// Short link, possibly relative to the server's own base
    pub short_url: String,
    /// QR code as a data URI, when one was requested and produced
    pub qr_code_data: Option<String>,
}

/// Discriminant common to both response shapes.
#[derive(Debug, Deserialize)]
struct ResponseTag {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Payload of a `success: true` response.
#[derive(Debug, Deserialize)]
struct SuccessBody {
    short_url: String,
    #[serde(default)]
    qr_code_data: Option<String>,
}

/// Client for the upload endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a pre-resolved absolute base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full upload endpoint URL.
    pub fn endpoint(&self) -> String {
        join_endpoint(&self.base_url, UPLOAD_PATH)
    }

    /// Send the validated content and interpret the answer.
    pub async fn upload(
        &self,
        content: SubmitContent,
        qr_required: bool,
    ) -> SubmitResult<Published> {
        let endpoint = self.endpoint();
        tracing::debug!("POST {} ({})", endpoint, content.kind());

        let form = build_form(content, qr_required)?;
        let response = self.http.post(endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Assemble the two-field multipart body.
fn build_form(content: SubmitContent, qr_required: bool) -> SubmitResult<Form> {
    let form = Form::new().text("qr_required", if qr_required { "true" } else { "false" });

    let form = match content {
        SubmitContent::Url(url) => form.text("content", url),
        SubmitContent::File(file) => {
            let part = Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(&file.media_type)?;
            form.part("content", part)
        }
    };

    Ok(form)
}

/// Map transport status and body onto the submission outcome.
///
/// A server-provided `error` message wins over the synthesized
/// `HTTP <status>` whenever the body carries a non-empty one, on any
/// status. A 2xx body that is not the expected JSON shape is an error in
/// its own right.
fn interpret_response(status: u16, body: &str) -> SubmitResult<Published> {
    let transport_ok = (200..300).contains(&status);

    if !transport_ok {
        if let Ok(tag) = serde_json::from_str::<ResponseTag>(body) {
            if let Some(message) = tag.error.filter(|m| !m.is_empty()) {
                return Err(SubmitError::Rejected(message));
            }
        }
        return Err(SubmitError::Status(status));
    }

    let tag: ResponseTag = serde_json::from_str(body)?;
    if !tag.success {
        return Err(match tag.error.filter(|m| !m.is_empty()) {
            Some(message) => SubmitError::Rejected(message),
            None => SubmitError::Status(status),
        });
    }

    let payload: SuccessBody = serde_json::from_str(body)?;
    Ok(Published {
        short_url: payload.short_url,
        qr_code_data: payload.qr_code_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_qr() {
        let body = r#"{"success": true, "short_url": "/s/abc123",
                       "qr_code_data": "data:image/svg+xml;utf8,..."}"#;
        let published = interpret_response(200, body).unwrap();
        assert_eq!(published.short_url, "/s/abc123");
        assert!(published.qr_code_data.is_some());
    }

    #[test]
    fn test_success_with_null_qr() {
        let body = r#"{"success": true, "short_url": "/s/abc123", "qr_code_data": null}"#;
        let published = interpret_response(200, body).unwrap();
        assert_eq!(published.qr_code_data, None);
    }

    #[test]
    fn test_server_error_message_wins_on_200() {
        let body = r#"{"success": false, "error": "duplicate"}"#;
        let err = interpret_response(200, body).unwrap_err();
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn test_server_error_message_wins_on_400() {
        let body = r#"{"success": false, "error": "Invalid URL"}"#;
        let err = interpret_response(400, body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL");
    }

    #[test]
    fn test_unparseable_body_synthesizes_status() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_empty_error_synthesizes_status() {
        let body = r#"{"success": false, "error": ""}"#;
        let err = interpret_response(502, body).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");

        // Same fallback even when the transport status is 2xx.
        let err = interpret_response(200, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 200");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = interpret_response(200, "not json at all").unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));

        // `success` tag present but the promised payload missing.
        let err = interpret_response(200, r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }
}
