//! Server Binary
//!
//! Runs the HTTP backend: account registration and login, password
//! recovery, pick submission, and the status endpoint.

use pickem::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    server::run().await.unwrap();
}
