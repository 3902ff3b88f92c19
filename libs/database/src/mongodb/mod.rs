//! MongoDB database connector and utilities
//!
//! Provides connection management for the service's document store.

mod config;
mod connector;

pub use config::{DEFAULT_DATABASE, DEFAULT_MONGODB_URI, MongoConfig};
pub use connector::{Mongo, connect, connect_from_config};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Database};
