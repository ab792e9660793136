use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// The page runs in the browser and cannot read files at runtime, so
/// `config.toml` is baked in at build time.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config file contents, falling back to defaults on error.
///
/// `base_url_override` replaces `api.base_url` when set and non-empty.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> AppConfig {
    let mut config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    });

    if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }

    config
}

/// Load the embedded config into the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG, option_env!("API_BASE_URL"));
        tracing::info!(
            base_url = %config.api.base_url,
            token_param = config.reset.token_param.name(),
            "Loaded reset page config"
        );
        config
    })
}

/// Get the loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_config)
}
