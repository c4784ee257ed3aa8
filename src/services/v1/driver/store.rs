use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::entities::v1::drivers::{ActiveModel, Model};
use crate::errors::Error;
use crate::helpers::now;
use crate::requests::v1::driver::DriverStoreRequest;
use crate::responses::v1::driver::Driver;
use crate::security::PasswordHasher;

/// Register a new driver account
///
/// Fails with a validation error if
/// - the username is missing, malformed or taken
/// - the password is missing
/// - the license number is malformed or taken
#[tracing::instrument(skip(db, hasher, request), fields(username = %request.username))]
pub async fn store(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    request: DriverStoreRequest,
) -> Result<Driver, Error> {
    let request = request.trimmed();
    let mut validation = request.validate();

    if !validation.has("username") && Model::username_exists(db, &request.username).await? {
        validation.add("username", "A user with that username already exists.");
    }

    if let Some(license_number) = &request.license_number {
        if !validation.has("license_number")
            && Model::license_number_exists(db, license_number).await?
        {
            validation.add("license_number", "Driver with this License number already exists.");
        }
    }

    validation.into_result()?;

    tracing::debug!("Hashing password with Argon2id");
    let password = hasher
        .hash(&request.password)
        .map_err(|e| Error::internal(format!("Failed to hash password: {e}")))?;

    let driver = ActiveModel {
        username: Set(request.username),
        password: Set(password),
        first_name: Set(request.first_name),
        last_name: Set(request.last_name),
        email: Set(request.email),
        license_number: Set(request.license_number),
        is_active: Set(true),
        date_joined: Set(now()),
        last_login: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(id = driver.id, "Driver created");

    Ok(driver.into())
}
