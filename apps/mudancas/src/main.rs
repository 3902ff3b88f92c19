//! Sistema Mudancas Service - Entry Point
//!
//! Establishes the MongoDB connection at startup and fails fast when the
//! database is unreachable.

use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(err) = mudancas::run().await {
        error!("Startup failed: {:?}", err);
        std::process::exit(1);
    }
}
