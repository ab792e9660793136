//! Everything the reset page does that is not rendering: configuration,
//! token extraction, the HTTP client, and the form workflow.

pub mod api;
pub mod config;
pub mod form;
pub mod token;

pub use api::{ApiError, HttpResetApi, PasswordResetApi};
pub use form::{FormError, Notice, NoticeKind, PendingReset, ResetForm};
pub use token::{ResetLink, ResetQuery, Token};
