pub mod template;
pub mod v1;

use actix_web::HttpResponse;
use actix_web::http::header;

pub use template::{Rendered, TemplateResponse};

/// `302 Found` pointing at `location`
pub fn redirect<T: AsRef<str>>(location: T) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}
