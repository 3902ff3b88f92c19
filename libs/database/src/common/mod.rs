//! Common types shared across database operations

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
