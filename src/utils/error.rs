use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field (or reason) to human readable message. Serialized as the error body.
pub type ErrorMap = BTreeMap<String, String>;

/// Build a one-entry error map such as `{"postnotfound": "No post found"}`.
pub fn error_map(key: &str, message: &str) -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.insert(key.to_string(), message.to_string());
    errors
}

fn describe(errors: &ErrorMap) -> String {
    errors.values().cloned().collect::<Vec<_>>().join("; ")
}

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Unauthorized: {}", describe(.0))]
    UnauthorizedError(ErrorMap),

    #[error("Bad Request: {}", describe(.0))]
    BadRequestError(ErrorMap),

    #[error("Conflict: {}", describe(.0))]
    ConflictError(ErrorMap),

    #[error("Not Found: {}", describe(.0))]
    NotFoundError(ErrorMap),

    #[error("Validation Error: {}", describe(.0))]
    ValidationError(ErrorMap),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl CustomError {
    pub fn not_found(key: &str, message: &str) -> Self {
        CustomError::NotFoundError(error_map(key, message))
    }

    pub fn unauthorized(key: &str, message: &str) -> Self {
        CustomError::UnauthorizedError(error_map(key, message))
    }

    pub fn conflict(key: &str, message: &str) -> Self {
        CustomError::ConflictError(error_map(key, message))
    }

    pub fn bad_request(key: &str, message: &str) -> Self {
        CustomError::BadRequestError(error_map(key, message))
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UnauthorizedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            // Duplicate likes are reported as a plain 400, not 409.
            CustomError::ConflictError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CustomError::UnauthorizedError(errors)
            | CustomError::BadRequestError(errors)
            | CustomError::ConflictError(errors)
            | CustomError::NotFoundError(errors)
            | CustomError::ValidationError(errors) => {
                HttpResponse::build(self.status_code()).json(errors)
            }
            CustomError::InternalServerError(msg) => {
                log::error!("{}", msg);
                HttpResponse::build(self.status_code())
                    .json(error_map("server", "Internal server error"))
            }
        }
    }
}
