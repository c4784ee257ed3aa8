use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString};
use rand::rngs::OsRng;
use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_drivers::Driver;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Username of the bootstrap account, its password is `password`.
pub const ADMIN: &str = "admin";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password = Argon2::default()
            .hash_password(b"password", &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash seeder password: {e}")))?
            .to_string();

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Driver::Table)
                    .columns([
                        Driver::Username,
                        Driver::Password,
                        Driver::FirstName,
                        Driver::LastName,
                        Driver::Email,
                        Driver::IsActive,
                        Driver::DateJoined,
                    ])
                    .values_panic([
                        ADMIN.into(),
                        password.into(),
                        "".into(),
                        "".into(),
                        "admin@localhost".into(),
                        true.into(),
                        Expr::current_timestamp().into(),
                    ])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Driver::Table)
                    .and_where(Expr::col(Driver::Username).eq(ADMIN))
                    .to_owned(),
            )
            .await
    }
}
