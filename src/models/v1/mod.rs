pub mod driver;
pub mod manufacturer;
pub mod token;
