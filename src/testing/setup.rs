use rand::Rng;
use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::config::Argon2Config;
use crate::database;
use crate::entities::v1::{drivers, manufacturers};
use crate::helpers::now;
use crate::security::PasswordHasher;

/// Password of every driver created by [`create_driver`]
pub const PASSWORD: &str = "password";

/// In-memory SQLite database with all migrations applied
///
/// Every call returns an isolated database. Setup failures panic so a broken
/// fixture fails the test right away.
///
/// ```no_run
/// use taxi_service::testing::setup;
///
/// #[tokio::test]
/// async fn test_something() {
///     let db = setup::database().await;
/// }
/// ```
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// Argon2 parameters cheap enough to hash in every test
pub fn argon2_config() -> Argon2Config {
    Argon2Config {
        memory_cost: 8192,
        time_cost: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&argon2_config())
}

/// A driver with a random username and [`PASSWORD`] as password
pub async fn create_driver(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<drivers::Model, DbErr> {
    let suffix: u32 = rand::thread_rng().r#gen();
    let password = hasher.hash(PASSWORD).expect("Failed to hash password");

    drivers::ActiveModel {
        username: Set(format!("driver_{suffix}")),
        password: Set(password),
        first_name: Set("Test".to_string()),
        last_name: Set("Driver".to_string()),
        email: Set(format!("driver_{suffix}@example.com")),
        license_number: Set(None),
        is_active: Set(true),
        date_joined: Set(now()),
        last_login: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// `Manufacturer 0` / `Country 0` up to `Manufacturer {count - 1}`, in order
pub async fn create_manufacturers(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<manufacturers::Model>, DbErr> {
    let mut created = Vec::with_capacity(count);

    for i in 0..count {
        created.push(
            manufacturers::Model::store(db, format!("Manufacturer {i}"), format!("Country {i}"))
                .await?,
        );
    }

    Ok(created)
}
