pub mod auth;
pub mod driver;
pub mod manufacturer;
