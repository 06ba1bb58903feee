//! Typed API Client
//!
//! Single point of contact with the backend. Every call is one attempt: no
//! retries, no timeout, no backoff. Failures come back as [`ApiError`] and the
//! caller decides what to log.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::console::config::Config;
use crate::console::session::{Session, SessionError};

/// Everything that can go wrong talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, TLS or body transfer failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed: {status} - {message}")]
    Status { status: StatusCode, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error body: the `message` field of
/// a JSON object if there is one, else the raw text, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(serde_json::Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string())
    } else {
        trimmed.to_string()
    }
}

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    session: Session,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            session,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Persist a token and attach it to every following request
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), SessionError> {
        self.session.begin(token)
    }

    /// Stop sending a token and forget the stored one
    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.session.end()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::GET, path)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Any response body on success is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.api_url(path);
        tracing::debug!("{} {}", method, url);
        let request = self.client.request(method, url);
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Issue the request and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: error_message(status, &body),
            });
        }
        Ok(body)
    }
}
