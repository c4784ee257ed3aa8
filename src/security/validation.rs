use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, digits and @/./+/-/_ only
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.@+-]+$").unwrap());

/// Three uppercase letters followed by five digits, e.g. `ABC12345`
static LICENSE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{5}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

pub const USERNAME_MAX_LENGTH: usize = 150;

/// Input format checks shared by request validators
pub struct Validator;

impl Validator {
    /// ```
    /// use taxi_service::security::Validator;
    ///
    /// assert!(Validator::validate_username("john.doe+1@fleet"));
    /// assert!(!Validator::validate_username("john doe"));
    /// ```
    pub fn validate_username(username: &str) -> bool {
        if username.is_empty() || username.chars().count() > USERNAME_MAX_LENGTH {
            return false;
        }

        USERNAME_REGEX.is_match(username)
    }

    /// ```
    /// use taxi_service::security::Validator;
    ///
    /// assert!(Validator::validate_license_number("ABC12345"));
    /// assert!(!Validator::validate_license_number("abc12345"));
    /// ```
    pub fn validate_license_number(license_number: &str) -> bool {
        LICENSE_NUMBER_REGEX.is_match(license_number)
    }

    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 254 || email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    /// Length in characters, not bytes
    pub fn max_length(value: &str, max: usize) -> bool {
        value.chars().count() <= max
    }
}
