use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::config::AuthConfig;
use crate::entities::v1::drivers::Model;
use crate::errors::{Error, Validation};
use crate::middlewares::v1::auth::{Auth, Authenticated as Cache};
use crate::requests::v1::auth::LoginRequest;
use crate::security::PasswordHasher;

pub const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Open a new session
///
/// Fails with a non-field validation error if the username is unknown, the
/// account is inactive or the password does not match.
#[tracing::instrument(skip(db, cached, hasher, config, request), fields(username = %request.username))]
pub async fn login(
    db: &DatabaseConnection,
    cached: &Cache,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    request: LoginRequest,
) -> Result<Auth, Error> {
    let username = request.username.trim();
    let password = request.password;
    let mut validation = Validation::new();

    if username.is_empty() {
        validation.add("username", "This field is required.");
    }

    if password.is_empty() {
        validation.add("password", "This field is required.");
    }

    validation.into_result()?;

    let Some(driver) = Model::find_by_username(db, username).await? else {
        tracing::info!("Login failed: unknown username");

        return Err(invalid_login());
    };

    let verified = hasher.verify(&password, &driver.password).unwrap_or_else(|e| {
        tracing::error!(driver_id = driver.id, error = %e, "Stored password hash is malformed");

        false
    });

    if !verified || !driver.is_active {
        tracing::info!(driver_id = driver.id, "Login failed: bad credentials");

        return Err(invalid_login());
    }

    let driver = upgrade_password(db, hasher, driver, &password).await?;
    let driver = driver.touch_last_login(db).await?;
    let token = driver
        .generate_token(db, Duration::from_secs(config.session_lifetime))
        .await?;

    let auth = Auth {
        token: token.id,
        driver: driver.into(),
        expired_at: token.expired_at,
    };

    cached.set(&auth);

    tracing::info!(driver_id = auth.driver.id, token_id = %auth.token, "Login succeeded");

    Ok(auth)
}

/// Re-hash a verified password stored with other Argon2 parameters
async fn upgrade_password(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    driver: Model,
    password: &str,
) -> Result<Model, Error> {
    if !hasher.needs_rehash(&driver.password).unwrap_or(false) {
        return Ok(driver);
    }

    match hasher.hash(password) {
        Ok(hash) => {
            tracing::info!(driver_id = driver.id, "Upgrading password hash");

            Ok(driver.set_password(db, hash).await?)
        }
        Err(e) => {
            tracing::warn!(driver_id = driver.id, error = %e, "Failed to upgrade password hash");

            Ok(driver)
        }
    }
}

fn invalid_login() -> Error {
    let mut validation = Validation::new();
    validation.add(Validation::NON_FIELD, INVALID_LOGIN);

    validation.into()
}
