//! API client configuration.

use std::time::Duration;

/// Reference backend origin.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Remote API configuration shared by every client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{0}': expected an http:// or https:// origin")]
    InvalidBaseUrl(String),
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = normalize(base_url.into())?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from `VITESSE_BASE_URL` and `VITESSE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("VITESSE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("VITESSE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self::new(base_url)?.with_timeout(timeout))
    }

    /// Absolute URL for an API path such as `/candidate`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize(base_url: String) -> Result<String, ConfigError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());

    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(base_url));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_reference_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("/user/auth"), "http://127.0.0.1:8080/user/auth");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("https://api.vitesse.test/").unwrap();
        assert_eq!(config.base_url, "https://api.vitesse.test");
        assert_eq!(config.endpoint("candidate"), "https://api.vitesse.test/candidate");
    }

    #[test]
    fn test_rejects_non_http_origin() {
        assert!(ApiConfig::new("ftp://example.com").is_err());
        assert!(ApiConfig::new("http://").is_err());
        assert!(ApiConfig::new("").is_err());
    }
}
