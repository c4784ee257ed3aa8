use serde::{Deserialize, Serialize};

use crate::errors::Validation;
use crate::security::Validator;
use crate::security::validation::USERNAME_MAX_LENGTH;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DriverStoreRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub license_number: Option<String>,
}

impl DriverStoreRequest {
    pub fn new<U: ToString, P: ToString>(username: U, password: P) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    pub fn license_number<T: ToString>(mut self, license_number: T) -> Self {
        self.license_number = Some(license_number.to_string());
        self
    }

    /// Blank license numbers count as absent
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            license_number: self
                .license_number
                .map(|license_number| license_number.trim().to_string())
                .filter(|license_number| !license_number.is_empty()),
        }
    }

    pub fn validate(&self) -> Validation {
        let mut validation = Validation::new();

        if self.username.is_empty() {
            validation.add("username", "This field is required.");
        } else if !Validator::max_length(&self.username, USERNAME_MAX_LENGTH) {
            validation.add(
                "username",
                format!("Ensure this value has at most {USERNAME_MAX_LENGTH} characters."),
            );
        } else if !Validator::validate_username(&self.username) {
            validation.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        if self.password.is_empty() {
            validation.add("password", "This field is required.");
        }

        if !self.email.is_empty() && !Validator::validate_email(&self.email) {
            validation.add("email", "Enter a valid email address.");
        }

        if let Some(license_number) = &self.license_number {
            if !Validator::validate_license_number(license_number) {
                validation.add(
                    "license_number",
                    "License number must consist of 3 uppercase letters followed by 5 digits.",
                );
            }
        }

        validation
    }
}
