pub mod driver;
pub mod manufacturer;
