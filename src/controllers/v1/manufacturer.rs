use actix_web::Either;
use actix_web::HttpResponse;
use actix_web::web::{Data, Form, Path, Query};
use sea_orm::DatabaseConnection;

use crate::errors::{Error, Validation};
use crate::middlewares::v1::auth::Auth;
use crate::pagination::PaginationRequest;
use crate::requests::v1::manufacturer::ManufacturerRequest;
use crate::responses::v1::manufacturer::Manufacturer;
use crate::responses::{TemplateResponse, redirect};
use crate::services;
use crate::urls;

pub const LIST_TEMPLATE: &str = "taxi/manufacturer_list.html";
pub const FORM_TEMPLATE: &str = "taxi/manufacturer_form.html";
pub const CONFIRM_DELETE_TEMPLATE: &str = "taxi/manufacturer_confirm_delete.html";

type Page = Either<TemplateResponse, HttpResponse>;

/// Manufacturers, five per page
#[get("/manufacturers/")]
pub async fn paginate(
    auth: Auth,
    db: Data<DatabaseConnection>,
    Query(request): Query<PaginationRequest>,
) -> Result<TemplateResponse, Error> {
    let listing = services::v1::manufacturer::paginate::paginate(&db, request).await?;

    Ok(TemplateResponse::list(
        LIST_TEMPLATE,
        "manufacturer_list",
        &listing.items,
        &listing.paginator,
        &listing.page,
    )
    .user(&auth.driver))
}

#[get("/manufacturers/create/")]
pub async fn create(auth: Auth) -> TemplateResponse {
    form(&auth, None, &ManufacturerRequest::default(), &Validation::new())
}

/// Fail if
/// - name or country is blank or longer than 255 characters
/// - name is already taken
#[post("/manufacturers/create/")]
pub async fn store(
    auth: Auth,
    db: Data<DatabaseConnection>,
    Form(request): Form<ManufacturerRequest>,
) -> Result<Page, Error> {
    match services::v1::manufacturer::store::store(&db, request.clone()).await {
        Ok(_) => Ok(Either::Right(redirect(urls::path(urls::MANUFACTURER_LIST)))),
        Err(Error::Validation(errors)) => Ok(Either::Left(form(&auth, None, &request, &errors))),
        Err(e) => Err(e),
    }
}

#[get("/manufacturers/{pk}/update/")]
pub async fn edit(
    auth: Auth,
    db: Data<DatabaseConnection>,
    pk: Path<i32>,
) -> Result<TemplateResponse, Error> {
    let manufacturer = services::v1::manufacturer::show::show(&db, pk.into_inner()).await?;
    let request = ManufacturerRequest::new(&manufacturer.name, &manufacturer.country);

    Ok(form(&auth, Some(&manufacturer), &request, &Validation::new()))
}

/// Fail if
/// - manufacturer not found
/// - name or country is blank or longer than 255 characters
/// - name is taken by another manufacturer
#[post("/manufacturers/{pk}/update/")]
pub async fn update(
    auth: Auth,
    db: Data<DatabaseConnection>,
    pk: Path<i32>,
    Form(request): Form<ManufacturerRequest>,
) -> Result<Page, Error> {
    let id = pk.into_inner();

    match services::v1::manufacturer::update::update(&db, id, request.clone()).await {
        Ok(_) => Ok(Either::Right(redirect(urls::path(urls::MANUFACTURER_LIST)))),
        Err(Error::Validation(errors)) => {
            let manufacturer = services::v1::manufacturer::show::show(&db, id).await?;

            Ok(Either::Left(form(&auth, Some(&manufacturer), &request, &errors)))
        }
        Err(e) => Err(e),
    }
}

#[get("/manufacturers/{pk}/delete/")]
pub async fn confirm_delete(
    auth: Auth,
    db: Data<DatabaseConnection>,
    pk: Path<i32>,
) -> Result<TemplateResponse, Error> {
    let manufacturer = services::v1::manufacturer::show::show(&db, pk.into_inner()).await?;

    Ok(TemplateResponse::new(CONFIRM_DELETE_TEMPLATE)
        .insert("manufacturer", &manufacturer)
        .insert("object", &manufacturer)
        .user(&auth.driver))
}

/// Fail if manufacturer not found
#[post("/manufacturers/{pk}/delete/")]
pub async fn delete(
    _auth: Auth,
    db: Data<DatabaseConnection>,
    pk: Path<i32>,
) -> Result<HttpResponse, Error> {
    services::v1::manufacturer::delete::delete(&db, pk.into_inner()).await?;

    Ok(redirect(urls::path(urls::MANUFACTURER_LIST)))
}

fn form(
    auth: &Auth,
    manufacturer: Option<&Manufacturer>,
    request: &ManufacturerRequest,
    errors: &Validation,
) -> TemplateResponse {
    let response = TemplateResponse::new(FORM_TEMPLATE)
        .insert("form", request)
        .insert("errors", errors)
        .user(&auth.driver);

    match manufacturer {
        Some(manufacturer) => response
            .insert("manufacturer", manufacturer)
            .insert("object", manufacturer),
        None => response,
    }
}
