//! MongoDB connector integration tests
//!
//! These start a real MongoDB container and therefore need Docker.

use database::mongodb::{DEFAULT_DATABASE, MongoConfig, connect, connect_from_config};
use test_utils::TestMongo;

#[tokio::test]
#[ignore] // Requires Docker
async fn test_connect_reports_resolved_host() {
    let mongo = TestMongo::new().await;

    let handle = connect(&mongo.connection_string)
        .await
        .expect("Failed to connect to test MongoDB");

    assert!(handle.host().contains("127.0.0.1"));
    assert_eq!(handle.database.name(), DEFAULT_DATABASE);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_connect_from_config() {
    let mongo = TestMongo::new().await;

    let config = MongoConfig::new(mongo.connection_string.clone());
    let handle = connect_from_config(&config)
        .await
        .expect("Failed to connect to test MongoDB");

    assert_eq!(handle.database.name(), DEFAULT_DATABASE);
}
