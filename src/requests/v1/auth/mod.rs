use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Where to go after a successful login
    #[serde(default)]
    pub next: Option<String>,
}

impl LoginRequest {
    pub fn new<U: ToString, P: ToString>(username: U, password: P) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            next: None,
        }
    }
}

/// Query string of the login page
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}
