use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of a login session in seconds
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime: u64,
    /// Expired session cleanup interval in seconds
    #[serde(default = "default_token_cleanup_interval")]
    pub token_cleanup_interval: u64,
    /// How long a resolved session stays in the in-memory cache, in seconds
    #[serde(default = "default_session_cache_ttl")]
    pub session_cache_ttl: u64,
    /// Name of the session cookie
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Only send the session cookie over HTTPS
    #[serde(default)]
    pub cookie_secure: bool,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of threads)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

/// Longest accepted `session_lifetime`, one year
pub const MAX_SESSION_LIFETIME: u64 = 60 * 60 * 24 * 365;

fn default_session_lifetime() -> u64 {
    60 * 60 * 24 * 14 // 2 weeks
}

fn default_token_cleanup_interval() -> u64 {
    900 // 15 minutes
}

fn default_session_cache_ttl() -> u64 {
    300 // 5 minutes
}

fn default_session_cookie() -> String {
    "sessionid".to_string()
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_lifetime: default_session_lifetime(),
            token_cleanup_interval: default_token_cleanup_interval(),
            session_cache_ttl: default_session_cache_ttl(),
            session_cookie: default_session_cookie(),
            cookie_secure: false,
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.session_lifetime == 0 {
            return Err(ConfigError::invalid("auth.session_lifetime must be > 0"));
        }
        if self.session_lifetime > MAX_SESSION_LIFETIME {
            return Err(ConfigError::invalid(format!(
                "auth.session_lifetime must be <= {MAX_SESSION_LIFETIME}"
            )));
        }
        if self.token_cleanup_interval == 0 {
            return Err(ConfigError::invalid("auth.token_cleanup_interval must be > 0"));
        }
        if self.session_cache_ttl == 0 {
            return Err(ConfigError::invalid("auth.session_cache_ttl must be > 0"));
        }
        if self.session_cookie.is_empty()
            || !self
                .session_cookie
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::invalid(
                "auth.session_cookie must be a non-empty token of [A-Za-z0-9_-]",
            ));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_cost == 0 {
            return Err(ConfigError::invalid("auth.argon2.memory_cost must be > 0"));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::invalid("auth.argon2.time_cost must be > 0"));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::invalid("auth.argon2.parallelism must be > 0"));
        }
        if self.hash_length < 4 {
            return Err(ConfigError::invalid("auth.argon2.hash_length must be >= 4"));
        }
        Ok(())
    }
}
