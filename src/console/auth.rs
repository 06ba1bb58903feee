/**
 * Authentication Module
 *
 * Login form state and the login call. A successful login begins the
 * session; everything else about credentials is the backend's business.
 */

use crate::console::api::{ApiClient, ApiError};
use crate::console::session::SessionError;
use crate::shared::records::{LoginRequest, LoginResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Login failed: {0}")]
    Api(#[from] ApiError),
    #[error("Login failed: the server returned an empty token")]
    EmptyToken,
    #[error("Login succeeded but the token could not be stored: {0}")]
    Session(#[from] SessionError),
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub email_input: String,
    pub password_input: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    /// Validated credentials, or an error the form can show
    pub fn credentials(&self) -> Result<LoginRequest, LoginError> {
        let email = self.email_input.trim();
        if email.is_empty() || self.password_input.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password_input.clone(),
        })
    }

    /// Forget everything typed into the form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Exchange credentials for a token and begin the session
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<(), LoginError> {
    let response: LoginResponse = client.post(client.config().login_path(), &request).await?;
    if response.token.trim().is_empty() {
        return Err(LoginError::EmptyToken);
    }
    client.set_token(response.token)?;
    tracing::info!("Signed in as {}", request.email);
    Ok(())
}
