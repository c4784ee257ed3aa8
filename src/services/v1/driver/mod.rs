pub mod paginate;
pub mod store;
