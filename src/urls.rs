//! Named routes
//!
//! Controllers are registered with literal paths, this table lets templates
//! and tests refer to them by name instead.

use thiserror::Error;

pub const INDEX: &str = "taxi:index";
pub const MANUFACTURER_LIST: &str = "taxi:manufacturer-list";
pub const MANUFACTURER_CREATE: &str = "taxi:manufacturer-create";
pub const MANUFACTURER_UPDATE: &str = "taxi:manufacturer-update";
pub const MANUFACTURER_DELETE: &str = "taxi:manufacturer-delete";
pub const DRIVER_LIST: &str = "taxi:driver-list";
pub const LOGIN: &str = "login";
pub const LOGOUT: &str = "logout";

const ROUTES: &[(&str, &str)] = &[
    (INDEX, "/"),
    (MANUFACTURER_LIST, "/manufacturers/"),
    (MANUFACTURER_CREATE, "/manufacturers/create/"),
    (MANUFACTURER_UPDATE, "/manufacturers/{pk}/update/"),
    (MANUFACTURER_DELETE, "/manufacturers/{pk}/delete/"),
    (DRIVER_LIST, "/drivers/"),
    (LOGIN, "/accounts/login/"),
    (LOGOUT, "/accounts/logout/"),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NoReverseMatch {
    #[error("Reverse for '{0}' not found")]
    UnknownName(String),
    #[error("Reverse for '{0}' requires a primary key")]
    MissingPk(String),
    #[error("Reverse for '{0}' takes no primary key")]
    UnexpectedPk(String),
}

/// Resolve a route name into its path
pub fn reverse(name: &str, pk: Option<i64>) -> Result<String, NoReverseMatch> {
    let (_, pattern) = ROUTES
        .iter()
        .find(|(route, _)| *route == name)
        .ok_or_else(|| NoReverseMatch::UnknownName(name.to_string()))?;

    match (pattern.contains("{pk}"), pk) {
        (true, Some(pk)) => Ok(pattern.replace("{pk}", &pk.to_string())),
        (true, None) => Err(NoReverseMatch::MissingPk(name.to_string())),
        (false, None) => Ok(pattern.to_string()),
        (false, Some(_)) => Err(NoReverseMatch::UnexpectedPk(name.to_string())),
    }
}

/// Path of a route that takes no arguments
///
/// Only used with the constants above, all of which resolve.
pub fn path(name: &'static str) -> String {
    reverse(name, None).unwrap_or_else(|_| "/".to_string())
}

/// Login page that sends the user back to `next` afterwards
pub fn login_redirect(next: &str) -> String {
    format!("{}?next={}", path(LOGIN), urlencoding::encode(next))
}

/// Only local absolute paths are accepted as a post-login destination
///
/// Browsers drop tab and newline while parsing a URL, so `/\t/host` would
/// turn into `//host`. Anything outside printable ASCII is refused before the
/// prefix checks, which also keeps the value a valid `Location` header.
pub fn safe_next(next: Option<&str>) -> String {
    match next {
        Some(next)
            if next.chars().all(|c| c.is_ascii_graphic())
                && next.starts_with('/')
                && !next.starts_with("//")
                && !next.contains('\\') =>
        {
            next.to_string()
        }
        _ => path(INDEX),
    }
}
