use actix_web::web::ServiceConfig;

use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    app.service(controllers::v1::index::index);
    // Manufacturer
    app.service(controllers::v1::manufacturer::paginate);
    app.service(controllers::v1::manufacturer::create);
    app.service(controllers::v1::manufacturer::store);
    app.service(controllers::v1::manufacturer::edit);
    app.service(controllers::v1::manufacturer::update);
    app.service(controllers::v1::manufacturer::confirm_delete);
    app.service(controllers::v1::manufacturer::delete);
    // Driver
    app.service(controllers::v1::driver::paginate);
    // Auth
    app.service(controllers::v1::auth::login_form);
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::logout);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);
}
