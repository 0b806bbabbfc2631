//! Application configuration.
//!
//! A static bundle has no runtime environment, so the defaults are embedded
//! as TOML and `CAT_API_BASE_URL` / `CAT_API_KEY` are read at compile time.

use contracts::shared::ApiError;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://api.thecatapi.com/v1"
api_key = ""
"#;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Configuration for the running app, loaded on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        match load_config(option_env!("CAT_API_BASE_URL"), option_env!("CAT_API_KEY")) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Invalid configuration, using defaults: {}", err);
                default_config()
            }
        }
    })
}

/// Parse the embedded defaults and apply overrides.
pub fn load_config(
    base_url_override: Option<&str>,
    api_key_override: Option<&str>,
) -> Result<AppConfig, ApiError> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(base_url) = base_url_override.filter(|s| !s.trim().is_empty()) {
        config.api.base_url = base_url.trim().to_string();
    }
    if let Some(api_key) = api_key_override {
        config.api.api_key = api_key.trim().to_string();
    }

    validate(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ApiError> {
    toml::from_str(contents).map_err(|e| ApiError::Config(e.to_string()))
}

fn validate(mut config: AppConfig) -> Result<AppConfig, ApiError> {
    let base_url = config.api.base_url.trim_end_matches('/');
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ApiError::Config(format!(
            "base_url must be an http(s) URL, got '{}'",
            config.api.base_url
        )));
    }
    config.api.base_url = base_url.to_string();
    Ok(config)
}

fn default_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: "https://api.thecatapi.com/v1".to_string(),
            api_key: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_overrides_apply() {
        let config = load_config(Some("http://localhost:8080/v1/"), Some(" live_abc ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/v1");
        assert_eq!(config.api.api_key, "live_abc");
    }

    #[test]
    fn test_blank_base_url_override_is_ignored() {
        let config = load_config(Some("  "), None).unwrap();
        assert_eq!(config.api.base_url, "https://api.thecatapi.com/v1");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = load_config(Some("ftp://cats"), None).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_missing_api_key_defaults_to_empty() {
        let config = parse_config("[api]\nbase_url = \"https://example.com\"\n").unwrap();
        assert_eq!(config.api.api_key, "");
    }
}
