use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use std::sync::Arc;

mod config;
mod database;
mod middleware;
mod post;
mod profile;
mod router;
mod utils;

use config::AppConfig;
use middleware::error_handler::{json_config, missing_credentials};
use middleware::not_found::not_found;
use post::post_repository::MongoPostRepository;
use post::post_service::PostService;
use profile::repository::MongoProfileRepository;
use router::index::routes;
use serde_json::json;

#[get("/")]
async fn default(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the posts API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": config.service_name,
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = database::connect_to_mongo(&config)
        .await
        .map_err(std::io::Error::other)?;

    let post_service = web::Data::new(PostService::new(
        Arc::new(MongoPostRepository::new(&db)),
        Arc::new(MongoProfileRepository::new(&db)),
    ));

    let bind_addr = (config.host.clone(), config.port);
    info!("Starting server on http://{}:{}", bind_addr.0, bind_addr.1);

    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(ErrorHandlers::new().handler(StatusCode::UNAUTHORIZED, missing_credentials))
            .app_data(config.clone())
            .app_data(post_service.clone())
            .app_data(json_config())
            .configure(routes)
            .service(default)
            .default_service(web::to(not_found))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
