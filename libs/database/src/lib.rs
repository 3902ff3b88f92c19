//! Database library providing the MongoDB connector for the mudancas service
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let mongo = mongodb::connect("mongodb://localhost:27017/sistema-mudancas").await?;
//! let collection = mongo.database.collection::<Document>("mudancas");
//! ```

pub mod common;
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
