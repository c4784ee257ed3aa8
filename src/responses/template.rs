//! HTML responses rendered from Tera templates

use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::Error;
use crate::pagination::{Page, Paginator};
use crate::responses::v1::driver::Driver;

/// Template name and context of a rendered page
///
/// Attached to the response extensions so callers can inspect what was
/// rendered without parsing HTML.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    pub template: String,
    pub context: serde_json::Value,
}

pub struct TemplateResponse {
    template: &'static str,
    context: Context,
}

impl TemplateResponse {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            context: Context::new(),
        }
    }

    /// Paginated list page
    ///
    /// `name` is the list's own context key, e.g. `manufacturer_list`. The
    /// same rows are also exposed as `object_list`.
    pub fn list<T: Serialize>(
        template: &'static str,
        name: &str,
        items: &[T],
        paginator: &Paginator,
        page: &Page,
    ) -> Self {
        Self::new(template)
            .insert(name, items)
            .insert("object_list", items)
            .insert("paginator", paginator)
            .insert("page_obj", &page.context())
            .insert("is_paginated", &(paginator.num_pages > 1))
    }

    pub fn insert<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.context.insert(key, value);
        self
    }

    /// The logged-in driver, used by the navigation bar
    pub fn user(self, driver: &Driver) -> Self {
        self.insert("user", driver)
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn render(&self, tera: &Tera) -> Result<String, tera::Error> {
        tera.render(self.template, &self.context)
    }
}

impl Responder for TemplateResponse {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let Some(tera) = req.app_data::<Data<Tera>>() else {
            return Error::internal("Template engine is not registered").error_response();
        };

        let body = match self.render(tera) {
            Ok(body) => body,
            Err(e) => return Error::Template(e).error_response(),
        };

        tracing::debug!(template = self.template, "Rendered template");

        let mut response = HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body);

        response.extensions_mut().insert(Rendered {
            template: self.template.to_string(),
            context: self.context.into_json(),
        });

        response
    }
}
