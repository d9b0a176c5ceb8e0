use crate::config::AppConfig;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// App-wide default service for paths no router claims.
pub async fn not_found(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::build(StatusCode::NOT_FOUND).json(json!({
        "success": false,
        "message": "Route does not exist",
        "httpStatusCode": StatusCode::NOT_FOUND.as_u16(),
        "error": "NOT_FOUND_ERROR",
        "service": config.service_name,
    }))
}
