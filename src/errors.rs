//! Application error type
//!
//! Every service returns [`Error`]. It implements [`ResponseError`] so a
//! controller can hand it straight back to actix-web.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::urls;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{message}")]
    NotFound { message: String },

    /// The request carries no valid session, `next` is where to go after login
    #[error("Authentication required")]
    Unauthenticated { next: String },

    #[error("Validation failed: {0}")]
    Validation(Validation),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("{message}")]
    Internal { message: String },
}

impl Error {
    pub fn not_found<T: ToString>(message: T) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    pub fn internal<T: ToString>(message: T) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Self::Validation(validation)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Unauthenticated { .. } => StatusCode::FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Database(_) | Error::Template(_) | Error::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::Unauthenticated { next } => HttpResponse::Found()
                .insert_header((header::LOCATION, urls::login_redirect(next)))
                .finish(),
            Error::NotFound { message } => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(format!("<h1>Not Found</h1><p>{}</p>", tera::escape_html(message))),
            Error::Validation(validation) => HttpResponse::BadRequest().json(validation),
            Error::Database(e) => {
                tracing::error!(error = %e, "Database error");

                internal_server_error()
            }
            Error::Template(e) => {
                tracing::error!(error = ?e, "Template error");

                internal_server_error()
            }
            Error::Internal { message } => {
                tracing::error!(%message, "Internal server error");

                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Server Error (500)</h1>")
}

/// Field name to error messages, rendered next to form inputs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Validation {
    errors: BTreeMap<String, Vec<String>>,
}

impl Validation {
    /// Key used for errors that do not belong to a single field
    pub const NON_FIELD: &'static str = "form";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: ToString, M: ToString>(&mut self, field: F, message: M) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, ", ")?;
                }

                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}
