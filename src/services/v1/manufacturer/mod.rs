pub mod delete;
pub mod paginate;
pub mod show;
pub mod store;
pub mod update;

/// Message shown when a manufacturer name is already taken
pub const NAME_TAKEN: &str = "Manufacturer with this Name already exists.";
