pub mod auth;
pub mod driver;
pub mod index;
pub mod manufacturer;
