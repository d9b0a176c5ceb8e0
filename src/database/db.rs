use crate::config::AppConfig;
use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, Database, options::ClientOptions};

/// Connect to MongoDB and ping the server so a bad URI fails at startup.
pub async fn connect_to_mongo(config: &AppConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some(config.service_name.clone());

    let client = Client::with_options(client_options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| {
            error!("Failed to reach MongoDB at {}: {}", config.mongodb_uri, e);
            e
        })?;

    info!("Connected successfully to MongoDB");

    Ok(client.database(&config.database_name))
}
