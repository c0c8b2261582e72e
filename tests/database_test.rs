use employees_backend::config::database::{self, DatabaseConfig, DatabaseError};

// Port 2 is closed and serverSelectionTimeoutMS bounds the driver's default
// 30s selection loop so the failure path stays fast.
const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:2/?serverSelectionTimeoutMS=800";

#[tokio::test]
async fn connect_fails_against_unreachable_server() {
    let config = DatabaseConfig {
        uri: UNREACHABLE_URI.to_string(),
        name: "testdb".to_string(),
    };

    let err = database::connect(&config).await.unwrap_err();
    assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
}

#[tokio::test]
async fn connect_fails_fast_on_malformed_uri() {
    let config = DatabaseConfig {
        uri: "employees-db".to_string(),
        name: "testdb".to_string(),
    };

    let err = database::connect(&config).await.unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidUri(_)));
}

#[tokio::test]
async fn connection_error_display_carries_detail() {
    let config = DatabaseConfig {
        uri: UNREACHABLE_URI.to_string(),
        name: "testdb".to_string(),
    };

    let err = database::connect(&config).await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("failed to connect to MongoDB: "));
    assert!(message.len() > "failed to connect to MongoDB: ".len());
}
