use serde::{Deserialize, Serialize};

/// Public view of a driver, the password hash never leaves the model
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Driver {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_number: Option<String>,
}
