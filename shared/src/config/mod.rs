//! Configuration module with sub-modules per concern
//!
//! - `environment` - Environment detection and logging configuration
//! - `remote` - Location and timeouts of the remote verification service
//! - `verification` - Redirect timing and link parameters for the flow

pub mod environment;
pub mod remote;
pub mod verification;

use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use ::config::ConfigError;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use remote::RemoteServiceConfig;
pub use verification::VerificationFlowConfig;

/// Prefix for environment variable overrides, e.g. `EDUVERIFY__REMOTE__BASE_URL`
pub const ENV_PREFIX: &str = "EDUVERIFY";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote verification service configuration
    #[serde(default)]
    pub remote: RemoteServiceConfig,

    /// Verification flow configuration
    #[serde(default)]
    pub verification: VerificationFlowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            remote: RemoteServiceConfig::default(),
            verification: VerificationFlowConfig::default(),
        }
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            remote: RemoteServiceConfig::from_env(),
            verification: VerificationFlowConfig::from_env(),
        }
    }

    /// Load layered configuration
    ///
    /// Sources, lowest precedence first:
    /// 1. Defaults for the detected environment
    /// 2. The environment's `config.<env>.toml`, if present
    /// 3. `EDUVERIFY__SECTION__KEY` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Config::builder()
            .add_source(Config::try_from(&Self::for_environment(environment))?)
            .add_source(File::new(environment.config_file(), FileFormat::Toml).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse TOML on top of the defaults for `environment`
    pub fn from_toml_str(environment: Environment, toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::for_environment(environment))?)
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.verification.redirect_delay_ms, 3000);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let toml = r#"
            [remote]
            provider = "http"
            base_url = "https://learn.example.org/api"

            [verification]
            redirect_delay_ms = 1500
        "#;

        let config = AppConfig::from_toml_str(Environment::Production, toml).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.remote.provider, "http");
        assert_eq!(config.remote.base_url, "https://learn.example.org/api");
        assert_eq!(config.remote.verify_path, "/auth/verify-email");
        assert_eq!(config.verification.redirect_delay_ms, 1500);
        assert_eq!(config.verification.landing_path, "/");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = AppConfig::from_toml_str(Environment::Development, "[verification\nredirect");
        assert!(result.is_err());
    }
}
