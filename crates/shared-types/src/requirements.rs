use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length, counted in UTF-16 code units the way the
/// browser's `String.length` counts it.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single password strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Length,
    Uppercase,
    Number,
    SpecialChar,
}

/// Every rule, in the order the checklist displays them.
pub const ALL_REQUIREMENTS: &[Requirement] = &[
    Requirement::Length,
    Requirement::Uppercase,
    Requirement::Number,
    Requirement::SpecialChar,
];

impl Requirement {
    /// Checklist label shown next to the rule.
    pub fn label(&self) -> &'static str {
        match self {
            Requirement::Length => "At least 8 characters",
            Requirement::Uppercase => "One uppercase letter",
            Requirement::Number => "One number",
            Requirement::SpecialChar => "One special character",
        }
    }

    /// Stable key used for DOM ids and validation error codes.
    pub fn key(&self) -> &'static str {
        match self {
            Requirement::Length => "length",
            Requirement::Uppercase => "uppercase",
            Requirement::Number => "number",
            Requirement::SpecialChar => "special_char",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Which strength rules a candidate password satisfies.
///
/// Derived from the password on every change; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special_char: bool,
}

impl PasswordRequirements {
    /// Evaluate all four rules against `password`.
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Length => self.length,
            Requirement::Uppercase => self.uppercase,
            Requirement::Number => self.number,
            Requirement::SpecialChar => self.special_char,
        }
    }

    pub fn all_met(&self) -> bool {
        ALL_REQUIREMENTS.iter().all(|r| self.is_met(*r))
    }

    /// Rules not yet satisfied, in checklist order.
    pub fn unmet(&self) -> Vec<Requirement> {
        ALL_REQUIREMENTS
            .iter()
            .copied()
            .filter(|r| !self.is_met(*r))
            .collect()
    }
}

/// `validator` hook enforcing every strength rule on a password field.
#[cfg(feature = "validation")]
pub fn validate_password_strength(password: &str) -> Result<(), validator::ValidationError> {
    let unmet = PasswordRequirements::evaluate(password).unmet();
    if unmet.is_empty() {
        return Ok(());
    }
    let rules: Vec<String> = unmet.iter().map(|r| r.to_string()).collect();
    Err(validator::ValidationError::new("password_strength").with_message(
        format!("Password does not meet all requirements: {}", rules.join(", ")).into(),
    ))
}
