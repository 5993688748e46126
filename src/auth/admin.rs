use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::Header, web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use secrecy::ExposeSecret;

use crate::{app_state::AppState, errors::AppError};

/// Extractor for admin routes: `Authorization: Bearer <ADMIN_TOKEN>`.
pub struct AdminGuard;

impl AdminGuard {
    fn check(req: &HttpRequest) -> Result<Self, AppError> {
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

        let auth = Authorization::<Bearer>::parse(req)
            .map_err(|_| AppError::Unauthorized("Missing or malformed bearer token".to_string()))?;

        if !tokens_match(auth.as_ref().token(), state.config.admin_token.expose_secret()) {
            log::warn!("Rejected admin request to {}", req.path());
            return Err(AppError::Unauthorized("Invalid admin token".to_string()));
        }
        Ok(AdminGuard)
    }
}

impl FromRequest for AdminGuard {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::check(req))
    }
}

/// Length-then-bytes comparison that does not stop at the first mismatch.
fn tokens_match(presented: &str, expected: &str) -> bool {
    let (a, b) = (presented.as_bytes(), expected.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
