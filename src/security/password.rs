use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::config::auth::Argon2Config;

/// Argon2id password hasher
///
/// Hashes are stored in PHC string format, so the salt and the parameters
/// travel with the hash and verification works regardless of the parameters
/// this hasher was built with.
///
/// ```no_run
/// use taxi_service::config::Argon2Config;
/// use taxi_service::security::PasswordHasher;
///
/// let hasher = PasswordHasher::from_config(&Argon2Config::default()).unwrap();
/// let hash = hasher.hash("my_secure_password").unwrap();
///
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// ```
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Fails when the parameters are out of Argon2's accepted ranges
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &Argon2Config) -> Result<Self, argon2::password_hash::Error> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(config.hash_length as usize),
        )?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt
    #[tracing::instrument(skip(self, password))]
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    /// `Ok(false)` on mismatch, `Err` only for a malformed hash
    #[tracing::instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether a stored hash was produced with other parameters than ours
    #[tracing::instrument(skip(self, hash))]
    pub fn needs_rehash(&self, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        if parsed_hash.algorithm.as_str() != "argon2id" {
            return Ok(true);
        }

        let current = self.argon2.params();

        Ok(parsed_hash.params.get_decimal("m") != Some(current.m_cost())
            || parsed_hash.params.get_decimal("t") != Some(current.t_cost())
            || parsed_hash.params.get_decimal("p") != Some(current.p_cost()))
    }
}
