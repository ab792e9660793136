use serde::{Deserialize, Serialize};

/// Backend used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Where the password-reset backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Query parameter the emailed link carries the token in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenParam {
    /// `?token=...`
    #[default]
    Token,
    /// `?id=...`, used by older reset emails.
    Id,
}

impl TokenParam {
    pub fn name(&self) -> &'static str {
        match self {
            TokenParam::Token => "token",
            TokenParam::Id => "id",
        }
    }
}

/// Settings for the reset page itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResetConfig {
    #[serde(default)]
    pub token_param: TokenParam,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reset: ResetConfig,
}
