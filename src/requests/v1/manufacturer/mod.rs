use serde::{Deserialize, Serialize};

use crate::errors::Validation;
use crate::security::Validator;

pub const NAME_MAX_LENGTH: usize = 255;
pub const COUNTRY_MAX_LENGTH: usize = 255;

/// Form body of the create and update pages
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManufacturerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

impl ManufacturerRequest {
    pub fn new<N: ToString, C: ToString>(name: N, country: C) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }

    /// Field checks that need no database access
    pub fn validate(&self) -> Validation {
        let mut validation = Validation::new();

        for (field, value, max) in [
            ("name", &self.name, NAME_MAX_LENGTH),
            ("country", &self.country, COUNTRY_MAX_LENGTH),
        ] {
            if value.trim().is_empty() {
                validation.add(field, "This field is required.");
            } else if !Validator::max_length(value.trim(), max) {
                validation.add(
                    field,
                    format!(
                        "Ensure this value has at most {max} characters (it has {}).",
                        value.trim().chars().count()
                    ),
                );
            }
        }

        validation
    }
}
