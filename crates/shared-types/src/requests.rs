use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// --- Password Reset Types ---

/// Body of `PUT /auth/password/reset/{token}`.
///
/// The token travels in the path, so only the two password fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "crate::requirements::validate_password_strength"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub confirm_password: String,
}

impl ResetPasswordRequest {
    pub fn new(password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Generic message response.
///
/// Backends are free to send extra fields or no message at all, so the
/// message defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
