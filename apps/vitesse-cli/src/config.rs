//! Application configuration loaded from environment variables.

use std::env;

use vitesse_infra::{ApiConfig, ConfigError};

use crate::cli::Cli;
use crate::telemetry::TelemetryConfig;

/// Login credentials; either may be missing until a command needs them.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub credentials: Credentials,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            credentials: Credentials {
                email: env::var("VITESSE_EMAIL").ok(),
                password: env::var("VITESSE_PASSWORD").ok(),
            },
            telemetry: TelemetryConfig::from_env(),
        })
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(base_url) = &cli.base_url {
            self.api = ApiConfig::new(base_url.clone())?.with_timeout(self.api.timeout);
        }
        if let Some(email) = &cli.email {
            self.credentials.email = Some(email.clone());
        }
        if let Some(password) = &cli.password {
            self.credentials.password = Some(password.clone());
        }
        if cli.json_logs {
            self.telemetry.json_logs = true;
        }
        Ok(self)
    }
}
