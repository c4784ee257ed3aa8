pub mod app;
pub mod auth;
pub mod security;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata, DatabaseConfig, LogFormat, ObservabilityConfig, ServerConfig};
pub use auth::{Argon2Config, AuthConfig};
pub use security::{SecurityConfig, SecurityHeadersConfig};

/// Prefix of environment variable overrides, e.g. `TAXI__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "TAXI";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl ConfigError {
    pub(crate) fn invalid<T: ToString>(message: T) -> Self {
        Self::ValidationError(message.to_string())
    }
}

/// Sanity checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
