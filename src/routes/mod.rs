pub mod auth;
pub mod tasks;

use actix_web::{web, HttpRequest};

use crate::error::AppError;

/// Registers every route.
///
/// Each path is a single resource so that an unsupported method yields 405
/// instead of falling through to 404. Paths matching no resource get a JSON 404.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .default_service(web::to(not_found))
        .service(
            web::resource("/register")
                .route(web::post().to(auth::register))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/login")
                .route(web::post().to(auth::login))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/tasks")
                .route(web::get().to(tasks::get_tasks))
                .route(web::post().to(tasks::create_task))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/tasks/{id}")
                .route(web::get().to(tasks::get_task))
                .route(web::put().to(tasks::update_task))
                .route(web::delete().to(tasks::delete_task))
                .default_service(web::to(method_not_allowed)),
        );
}

/// Malformed or missing JSON bodies become `AppError::BadRequest`.
/// The `Content-Type` header is not required, only a parsable body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

async fn method_not_allowed(req: HttpRequest) -> Result<&'static str, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "Method {} not allowed on {}",
        req.method(),
        req.path()
    )))
}

async fn not_found() -> Result<&'static str, AppError> {
    Err(AppError::NotFound("Not found".into()))
}
