//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::Client;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    /// Connection string pointing at the mapped port, with the service
    /// database selected in the URI path
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    ///
    /// Uses the mongo 7 image by default.
    pub async fn new() -> Self {
        let mongo_image = Mongo::default().with_tag("7");

        let container = mongo_image
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}/sistema-mudancas", host_port);

        // Wait until the server answers before handing the URI to a test
        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");
        client
            .list_database_names()
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            connection_string,
        }
    }
}
