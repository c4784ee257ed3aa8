pub mod cleanup;
pub mod login;
pub mod logout;
