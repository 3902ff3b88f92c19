use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::{Client, Database};
use tracing::info;

use super::config::{DEFAULT_DATABASE, MongoConfig};
use crate::common::{DatabaseError, DatabaseResult};

/// Owned handle to an established MongoDB connection
///
/// Constructed once at startup and passed by reference to consumers; the
/// connection is never stored in global state.
#[derive(Clone)]
pub struct Mongo {
    pub client: Client,
    /// The database selected by the URI path, or [`DEFAULT_DATABASE`]
    pub database: Database,
    host: String,
}

impl Mongo {
    /// Resolved host(s) of the established connection
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Connect to MongoDB and return a [`Mongo`] handle
///
/// Performs exactly one connection attempt: parse the URI, build the client
/// with driver-default pooling and timeouts, then verify reachability with a
/// single lightweight round-trip. Callers decide what a failure means; this
/// function only reports it.
///
/// # Arguments
/// * `uri` - MongoDB connection string (e.g., "mongodb://localhost:27017/sistema-mudancas")
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let mongo = connect("mongodb://localhost:27017/sistema-mudancas").await?;
/// let collection = mongo.database.collection::<Document>("mudancas");
/// ```
pub async fn connect(uri: &str) -> DatabaseResult<Mongo> {
    info!("Attempting to connect to MongoDB at {}", uri);

    let options = ClientOptions::parse(uri).await?;
    let host = format_hosts(&options.hosts);

    let client = Client::with_options(options)?;

    // The driver connects lazily; one round-trip proves the server is
    // actually reachable before startup continues.
    client
        .list_database_names()
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    let database = default_database(&client);

    info!("MongoDB connected at {}", host);

    Ok(Mongo {
        client,
        database,
        host,
    })
}

/// Connect using a [`MongoConfig`]
///
/// This is the entry point the service uses at startup.
///
/// # Example
/// ```ignore
/// use core_config::FromEnv;
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::from_env()?;
/// let mongo = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Mongo> {
    connect(&config.uri).await
}

fn format_hosts(hosts: &[ServerAddress]) -> String {
    hosts
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn default_database(client: &Client) -> Database {
    client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE))
}
