//! Reqwest-backed voter API adapter.
//!
//! Owns transport details only: endpoint layout, request encoding, timeout
//! and status mapping, and decoding of success and rejection bodies.

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, StatusCode, Url};

use super::dto::{LoginEmailRequest, RegistrationQuery, RegistrationStatusDto, SignUpRequest};
use super::VoterApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError};
use crate::form::FormErrors;
use crate::voter::VoterRecord;

/// Endpoints resolved once against the configured base URL
#[derive(Debug, Clone)]
struct Endpoints {
    registrations: Url,
    voters: Url,
    login: Url,
}

impl Endpoints {
    fn resolve(base: &Url) -> Result<Self, ConfigError> {
        let join = |path: &str| {
            base.join(path).map_err(|e| ConfigError::InvalidBaseUrl {
                url: base.to_string(),
                reason: e.to_string(),
            })
        };
        Ok(Self {
            registrations: join("registrations/")?,
            voters: join("voters/")?,
            login: join("login/")?,
        })
    }
}

/// Voter API client speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpVoterApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpVoterApi {
    /// Build a client with the configured timeout and user-agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or an
    /// endpoint cannot be joined onto the base URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            endpoints: Endpoints::resolve(&config.base_url)?,
        })
    }

    /// Send a request and return the body of a success response
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Voter API rejected request");
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl VoterApi for HttpVoterApi {
    async fn check_registration(&self, voter: &VoterRecord) -> Result<bool, ApiError> {
        let request = self
            .client
            .get(self.endpoints.registrations.clone())
            .query(&RegistrationQuery::from(voter));
        let body = self.send(request).await?;
        let status = parse_status(&body)?;
        tracing::info!(registered = status.registered, "Registration status received");
        Ok(status.registered)
    }

    async fn sign_up(&self, voter: &VoterRecord) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.endpoints.voters.clone())
            .json(&SignUpRequest::from(voter));
        self.send(request).await?;
        tracing::info!("Voter signed up for reminders");
        Ok(())
    }

    async fn send_login_email(&self, email: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.endpoints.login.clone())
            .json(&LoginEmailRequest { email });
        self.send(request).await?;
        tracing::info!("Login email requested");
        Ok(())
    }
}

fn parse_status(body: &[u8]) -> Result<RegistrationStatusDto, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::Decode(format!("invalid registration status payload: {e}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    if status == StatusCode::BAD_REQUEST {
        if let Ok(errors) = serde_json::from_slice::<FormErrors>(body) {
            if !errors.is_empty() {
                return ApiError::Validation(errors);
            }
        }
    }

    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::form::FieldName;

    #[test]
    fn resolves_endpoints_under_base_path() {
        let config = ApiConfig::new("https://vote.example.org/api", Duration::from_secs(5)).unwrap();
        let api = HttpVoterApi::new(&config).unwrap();

        assert_eq!(
            api.endpoints.registrations.as_str(),
            "https://vote.example.org/api/registrations/"
        );
        assert_eq!(api.endpoints.voters.as_str(), "https://vote.example.org/api/voters/");
        assert_eq!(api.endpoints.login.as_str(), "https://vote.example.org/api/login/");
    }

    #[test]
    fn bad_request_with_field_errors_is_validation() {
        let error = map_status_error(StatusCode::BAD_REQUEST, br#"{"zip_code": ["invalid"]}"#);
        let errors = error.form_errors().expect("should be a validation error");
        assert_eq!(errors.for_field(FieldName::ZipCode), ["invalid"]);
    }

    #[test]
    fn bad_request_without_field_errors_is_status() {
        let bodies: [&[u8]; 3] = [br#"{"detail": "Malformed request."}"#, b"", b"{}"];
        for body in bodies {
            let error = map_status_error(StatusCode::BAD_REQUEST, body);
            assert!(
                matches!(error, ApiError::Status { status: 400, .. }),
                "unexpected mapping: {error:?}"
            );
        }
    }

    #[test]
    fn maps_other_statuses() {
        let not_found = map_status_error(StatusCode::NOT_FOUND, br#"{"detail": "Not found."}"#);
        match not_found {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, r#"status 404: {"detail": "Not found."}"#);
            }
            other => panic!("unexpected mapping: {other:?}"),
        }

        assert!(matches!(
            map_status_error(StatusCode::GATEWAY_TIMEOUT, b""),
            ApiError::Timeout(_)
        ));
        assert!(matches!(
            map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom"),
            ApiError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn preview_is_compacted_and_truncated() {
        assert_eq!(body_preview(b"  a \n\t b  "), "a b");
        let long = "x".repeat(200);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn rejects_undecodable_status_body() {
        assert!(matches!(parse_status(b"<html>"), Err(ApiError::Decode(_))));
        assert!(!parse_status(br#"{"registered": false}"#).unwrap().registered);
    }
}
