use shared_types::{MessageResponse, PasswordRequirements, Requirement, ResetPasswordRequest};
use thiserror::Error;

use crate::api::{ApiError, PasswordResetApi};
use crate::token::Token;

pub const SUCCESS_MESSAGE: &str =
    "Password reset successfully. You can now sign in with your new password.";

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notification produced by the submit workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// A submit refused before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid or missing reset token. Please use the link from your email.")]
    MissingToken,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password does not meet all requirements: {}", list(.0))]
    WeakPassword(Vec<Requirement>),
    #[error("A password reset is already in progress")]
    InFlight,
}

fn list(unmet: &[Requirement]) -> String {
    unmet
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<FormError> for Notice {
    fn from(err: FormError) -> Self {
        Notice::error(err.to_string())
    }
}

/// A submit that passed local checks and is waiting on the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReset {
    pub token: Token,
    pub request: ResetPasswordRequest,
}

/// State of the reset form for the lifetime of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetForm {
    password: String,
    confirm_password: String,
    token: Option<Token>,
    requirements: PasswordRequirements,
    submitting: bool,
}

impl ResetForm {
    /// `token` comes from the URL; see [`set_token`](Self::set_token).
    pub fn new(token: Option<Token>) -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            token,
            requirements: PasswordRequirements::default(),
            submitting: false,
        }
    }

    /// Replace the token once the undecoded page URL has been read.
    /// Typed input is kept.
    pub fn set_token(&mut self, token: Option<Token>) {
        self.token = token;
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.requirements = PasswordRequirements::evaluate(&self.password);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn requirements(&self) -> PasswordRequirements {
        self.requirements
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run the local checks in order: token, confirmation, strength.
    pub fn check(&self) -> Result<PendingReset, FormError> {
        let token = self.token.clone().ok_or(FormError::MissingToken)?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.requirements.all_met() {
            return Err(FormError::WeakPassword(self.requirements.unmet()));
        }
        Ok(PendingReset {
            token,
            request: ResetPasswordRequest::new(&self.password, &self.confirm_password),
        })
    }

    /// Validate and mark the form as submitting.
    ///
    /// On `Err` nothing changes and no request may be sent.
    pub fn begin_submit(&mut self) -> Result<PendingReset, FormError> {
        if self.submitting {
            tracing::warn!("Ignoring submit while a reset is in flight");
            return Err(FormError::InFlight);
        }
        let pending = self.check().inspect_err(|e| {
            tracing::debug!(reason = %e, "Reset form failed local checks");
        })?;
        self.submitting = true;
        Ok(pending)
    }

    /// Clear the submitting flag and turn the backend outcome into a notice.
    pub fn finish_submit(&mut self, outcome: Result<MessageResponse, ApiError>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(_) => Notice::success(SUCCESS_MESSAGE),
            Err(e) => Notice::error(e.user_message()),
        }
    }

    /// One full submit: local checks, at most one request, then a notice.
    ///
    /// UI code that cannot hold `&mut self` across the await uses
    /// [`begin_submit`](Self::begin_submit) and
    /// [`finish_submit`](Self::finish_submit) directly.
    pub async fn submit<A: PasswordResetApi>(&mut self, api: &A) -> Notice {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(e) => return e.into(),
        };
        let outcome = api.reset_password(&pending.token, &pending.request).await;
        self.finish_submit(outcome)
    }
}
