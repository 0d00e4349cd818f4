use crate::config::MongoConfig;
use crate::error::AppError;
use mongodb::{Client as MongoClient, Database, bson::doc, options::ClientOptions};

/// Database used when neither the config nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Connects to MongoDB and resolves the working database: explicit
/// `database` first, then the one in the URI path, then `DEFAULT_DATABASE`.
pub async fn connect(
    config: &MongoConfig,
    app_name: &str,
) -> Result<(MongoClient, Database), AppError> {
    let mut client_options = ClientOptions::parse(&config.uri).await.map_err(|e| {
        tracing::error!("Failed to parse MongoDB connection string: {}", e);
        AppError::from(e)
    })?;
    client_options.app_name = Some(app_name.to_string());

    let client = MongoClient::with_options(client_options)?;

    let db = match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    tracing::info!(database = %db.name(), "Connected to MongoDB");
    Ok((client, db))
}

/// Round-trips a `ping` through the admin database.
pub async fn ping(client: &MongoClient) -> Result<(), AppError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| {
            tracing::error!("MongoDB health check failed: {}", e);
            AppError::from(e)
        })?;
    Ok(())
}
