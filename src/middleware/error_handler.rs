use crate::utils::error::{CustomError, error_map};
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{Error, HttpRequest, HttpResponse, Result, error::JsonPayloadError, web};
use log::{debug, warn};

/// Render body parse failures in the same `{key: message}` shape as every
/// other client error.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected JSON body on {}: {}", req.path(), err);
    CustomError::bad_request("body", &err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// 401 handler. The bearer middleware answers a missing or malformed
/// `Authorization` header with an empty body and a `WWW-Authenticate`
/// challenge; give those the JSON body `verify_token` uses. Our own 401s
/// carry no challenge and pass through untouched.
pub fn missing_credentials<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let Some(challenge) = res.headers().get(header::WWW_AUTHENTICATE).cloned() else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    warn!("Rejected request to {} without bearer token", res.request().path());

    let mut new_response =
        HttpResponse::Unauthorized().json(error_map("unauthorized", "No token provided"));
    new_response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, challenge);

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}
