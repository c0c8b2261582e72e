use bson::doc;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Database};
use std::env;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_URI: &str = "mongodb://mongodb:27017";
pub const DEFAULT_DB_NAME: &str = "employees";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid MongoDB connection string: {0}")]
    InvalidUri(#[source] mongodb::error::Error),
    #[error("failed to build MongoDB client: {0}")]
    ClientBuild(#[source] mongodb::error::Error),
    #[error("failed to connect to MongoDB: {0}")]
    ConnectionFailed(#[source] mongodb::error::Error),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::resolve(env::var("MONGODB_URI").ok(), env::var("DB_NAME").ok())
    }

    fn resolve(uri: Option<String>, name: Option<String>) -> Self {
        Self {
            uri: uri.unwrap_or_else(|| DEFAULT_URI.to_string()),
            name: name.unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        }
    }
}

pub async fn client_options(uri: &str) -> Result<ClientOptions, DatabaseError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(DatabaseError::InvalidUri)?;

    // Cosmos DB requires TLS and does not support retryable writes,
    // so both are forced no matter what the URI asked for.
    options.tls = Some(Tls::Enabled(TlsOptions::default()));
    options.retry_writes = Some(false);

    Ok(options)
}

pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let options = client_options(&config.uri).await?;
    let client = Client::with_options(options).map_err(DatabaseError::ClientBuild)?;

    // The driver connects lazily; ping so the handle is only handed out
    // after the server has actually been reached.
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(DatabaseError::ConnectionFailed)?;

    info!(database = %config.name, "Successfully connected to MongoDB");

    Ok(client.database(&config.name))
}
