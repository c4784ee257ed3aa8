pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_drivers;
mod m20240301_000002_create_manufacturers;
mod m20240301_000003_create_tokens;
mod m20240301_000004_driver_initial_seeder;

pub use m20240301_000001_create_drivers::Driver;
pub use m20240301_000002_create_manufacturers::Manufacturer;
pub use m20240301_000003_create_tokens::Token;
pub use m20240301_000004_driver_initial_seeder::ADMIN;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_drivers::Migration),
            Box::new(m20240301_000002_create_manufacturers::Migration),
            Box::new(m20240301_000003_create_tokens::Migration),
            Box::new(m20240301_000004_driver_initial_seeder::Migration),
        ]
    }
}
