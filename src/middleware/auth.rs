use crate::config::AppConfig;
use crate::utils::error::CustomError;
use actix_web::dev::{Payload, ServiceRequest};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::warn;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

/// Verify the bearer JWT and stash its claims in the request extensions.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let secret = match req.app_data::<web::Data<AppConfig>>() {
        Some(config) => config.jwt_secret.clone(),
        None => {
            return Err((
                CustomError::InternalServerError("AppConfig is not registered".into()).into(),
                req,
            ));
        }
    };

    match decode::<Claims>(
        credentials.token(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(token_data) => {
            req.extensions_mut().insert(token_data.claims);
            Ok(req)
        }
        Err(e) => {
            warn!("Rejected bearer token on {}: {}", req.path(), e);
            Err((
                CustomError::unauthorized("unauthorized", "Invalid token").into(),
                req,
            ))
        }
    }
}

/// The caller's identity, taken from the claims `verify_token` stored.
///
/// Handlers that take an `AuthUser` must sit behind the bearer middleware.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: ObjectId,
}

impl FromRequest for AuthUser {
    type Error = CustomError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Claims>()
            .ok_or_else(|| CustomError::unauthorized("unauthorized", "Not authenticated"))
            .and_then(|claims| {
                ObjectId::parse_str(&claims.id).map_err(|_| {
                    CustomError::unauthorized("unauthorized", "Invalid user id in token")
                })
            })
            .map(|id| AuthUser { id });

        ready(result)
    }
}

/// Sign a 24 hour token for `user_id`.
#[cfg(test)]
pub fn create_token(user_id: &str, secret: &str) -> Result<String, CustomError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(24))
        .ok_or_else(|| CustomError::InternalServerError("Token expiry overflow".into()))?
        .timestamp() as usize;

    let claims = Claims {
        id: user_id.to_owned(),
        exp: expiration,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| CustomError::InternalServerError("Token generation failed".into()))
}
