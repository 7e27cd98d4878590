// src/bin/server.rs
use std::path::PathBuf;

use dmm_scrape::config::consts::DEFAULT_PORT;
use dmm_scrape::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("app listening on port {port}");

    axum::serve(listener, serve::router(root)).await?;
    Ok(())
}
