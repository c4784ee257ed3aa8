pub mod drivers;
pub mod manufacturers;
pub mod tokens;
