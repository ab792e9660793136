use shared_types::{
    ApiConfig, ApiErrorBody, MessageResponse, ResetPasswordRequest, GENERIC_FAILURE_MESSAGE,
};
use thiserror::Error;

use crate::token::Token;

// ── Trait ────────────────────────────────────────────────────────────

/// Backend operations the reset page needs.
#[allow(async_fn_in_trait)]
pub trait PasswordResetApi {
    /// Replace the password of the account identified by `token`.
    async fn reset_password(
        &self,
        token: &Token,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError>;
}

/// Why a reset request did not succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("password reset rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("password reset request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text for the error toast: the server's message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

// ── HTTP implementation ─────────────────────────────────────────────

/// `PasswordResetApi` over HTTP. Works natively and in the browser.
#[derive(Debug, Clone)]
pub struct HttpResetApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResetApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// `{base_url}/auth/password/reset/{token}` with the token percent-encoded.
    pub fn endpoint(&self, token: &Token) -> String {
        format!(
            "{}/auth/password/reset/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(token.as_str())
        )
    }
}

impl PasswordResetApi for HttpResetApi {
    #[tracing::instrument(skip_all, fields(base_url = %self.base_url))]
    async fn reset_password(
        &self,
        token: &Token,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .client
            .put(self.endpoint(token))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // The URL embeds the token.
                let e = e.without_url();
                tracing::error!(error = %e, "Password reset request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        // A body cut off mid-read is treated as empty; the status still decides.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %e.without_url(),
                    "Failed to read password reset response body"
                );
                String::new()
            }
        };

        if !status.is_success() {
            let message = ApiErrorBody::message_from(&body);
            tracing::warn!(
                status = status.as_u16(),
                has_message = message.is_some(),
                "Password reset rejected"
            );
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(status = status.as_u16(), "Password reset accepted");
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
