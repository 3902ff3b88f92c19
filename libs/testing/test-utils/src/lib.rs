//! Shared test utilities
//!
//! Provides reusable test infrastructure:
//! - `TestMongo`: MongoDB container with automatic cleanup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::TestMongo;
//!
//! #[tokio::test]
//! async fn my_mongodb_test() {
//!     let mongo = TestMongo::new().await;
//!     let handle = database::mongodb::connect(&mongo.connection_string).await.unwrap();
//! }
//! ```

mod mongodb;

pub use mongodb::TestMongo;
