use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::{auth::token::Claims, error::AppError};

/// The username carried by the verified session token of the current request.
///
/// Only usable on routes behind `AuthMiddleware`, which inserts the `Claims`.
/// Without them the extractor fails with `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims.username.clone()))),
            None => {
                let err = AppError::Unauthorized("No session for this request".to_string());
                ready(Err(err.into()))
            }
        }
    }
}
