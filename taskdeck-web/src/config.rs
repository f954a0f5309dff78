//! Frontend configuration module
//!
//! Values are baked in at build time through environment variables so the
//! same WASM bundle can be pointed at different API deployments.

/// Default API root when `TASKDECK_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default name of the cookie holding the session token.
pub const DEFAULT_SESSION_COOKIE: &str = "petiko";

/// Frontend configuration for the API endpoint, session cookie and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base address every API path is resolved against
    pub api_base_url: String,
    /// Cookie name under which the session token is persisted
    pub session_cookie: String,
    /// Console log level
    pub log_level: log::Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASKDECK_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            session_cookie: option_env!("TASKDECK_SESSION_COOKIE")
                .unwrap_or(DEFAULT_SESSION_COOKIE)
                .to_string(),
            log_level: parse_log_level(option_env!("TASKDECK_LOG_LEVEL")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the session cookie name
    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url().is_empty());
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.session_cookie().is_empty());
    }

    #[test]
    fn test_frontend_config_new_matches_default() {
        assert_eq!(FrontendConfig::new(), FrontendConfig::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("chatty")), log::Level::Info);
        assert_eq!(parse_log_level(None), log::Level::Info);
    }
}
