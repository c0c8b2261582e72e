use std::process;

use employees_backend::config::database::{self, DatabaseConfig};
use employees_backend::AppState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env();

    let db = match database::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            // Fatal by design: without the database there is nothing to serve.
            error!("MongoDB connection error: {e}");
            process::exit(1);
        }
    };

    let state = AppState { db };
    info!(database = %state.db.name(), "database handle ready");
}
