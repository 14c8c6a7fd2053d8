use crate::config::ApiConfig;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("response had no data")]
    MissingData,
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `{ success, data, error }` wrapper used by the feedback endpoints
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    fn server_message(&self) -> Option<String> {
        self.error.clone().or_else(|| self.message.clone())
    }
}

/// Shared HTTP plumbing for the feedback backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    /// Sends the request and returns `(status, body)`
    pub fn send(&self, request: RequestBuilder, label: &str) -> Result<(u16, String), ApiError> {
        let response = request.send().map_err(|error| {
            tracing::warn!(%error, request = label, "api transport error");
            error
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, request = label, bytes = body.len(), "api response");
        Ok((status, body))
    }
}

/// Unwraps an enveloped response into its `data` payload
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(error) if is_success(status) => return Err(ApiError::Decode(error)),
        Err(_) => {
            return Err(ApiError::Status {
                status,
                message: fallback_message(body),
            });
        }
    };

    if !is_success(status) {
        return Err(ApiError::Status {
            status,
            message: envelope
                .server_message()
                .unwrap_or_else(|| fallback_message(body)),
        });
    }
    if !envelope.success {
        return Err(ApiError::Rejected(
            envelope
                .server_message()
                .unwrap_or_else(|| "request was not successful".to_string()),
        ));
    }
    envelope.data.ok_or(ApiError::MissingData)
}

/// Like [`decode_envelope`] but the payload is optional
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    match decode_envelope::<serde_json::Value>(status, body) {
        Ok(_) | Err(ApiError::MissingData) => Ok(()),
        Err(error) => Err(error),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response".to_string()
    } else {
        trimmed.chars().take(120).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/api/feedback/"),
            "http://localhost:3000/api/feedback/"
        );
        assert_eq!(
            client.url("api/post/getPosts"),
            "http://localhost:3000/api/post/getPosts"
        );
    }

    #[test]
    fn test_decode_success() {
        let value: Vec<u32> = decode_envelope(200, r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_rejected_carries_server_error() {
        let error = decode_envelope::<u32>(200, r#"{"success":false,"error":"Email invalid"}"#)
            .unwrap_err();
        assert_eq!(error.to_string(), "Email invalid");
    }

    #[test]
    fn test_decode_error_status() {
        let error =
            decode_envelope::<u32>(400, r#"{"success":false,"error":"Missing fullName"}"#)
                .unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 400, .. }));
        assert!(error.to_string().contains("Missing fullName"));

        let error = decode_envelope::<u32>(502, "Bad Gateway").unwrap_err();
        assert_eq!(error.to_string(), "server returned 502: Bad Gateway");
    }

    #[test]
    fn test_decode_missing_data() {
        let error = decode_envelope::<u32>(200, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(error, ApiError::MissingData));
        assert!(decode_ack(200, r#"{"success":true}"#).is_ok());
    }

    #[test]
    fn test_decode_garbage_on_success_status() {
        let error = decode_envelope::<u32>(200, "<html>").unwrap_err();
        assert!(matches!(error, ApiError::Decode(_)));
    }
}
