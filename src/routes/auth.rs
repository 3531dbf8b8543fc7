use crate::{
    auth::{AuthService, Credentials, TokenResponse},
    error::AppError,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Stores the credential and returns the new user's id and username.
///
/// ## Responses:
/// - `201 Created`: `{"id": .., "username": ..}`.
/// - `400 Bad Request`: malformed body, or empty username/password.
/// - `409 Conflict`: the username is already registered.
/// - `500 Internal Server Error`: storage or hashing failure.
pub async fn register(
    auth: web::Data<AuthService>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let user = auth
        .register(&credentials.username, &credentials.password)
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// Verifies the credentials and returns a session token valid for five minutes.
///
/// ## Responses:
/// - `200 OK`: `{"token": ..}`.
/// - `400 Bad Request`: malformed body.
/// - `401 Unauthorized`: unknown user or wrong password.
pub async fn login(
    auth: web::Data<AuthService>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let token = auth
        .login(&credentials.username, &credentials.password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
