use mongodb::Database;

pub mod config;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
