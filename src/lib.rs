mod api;
mod error;
mod models;
mod repo;
mod store;

use std::io;
use std::net::SocketAddr;

use axum::{serve::Serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use api::build_app;
use store::BookStore;

/// Bind `addr` and build the server around an empty store.
///
/// Returns the address actually bound (useful when `addr` asks for port 0)
/// and the server future, which runs until it is dropped or fails.
pub async fn start_server(
    addr: &str,
) -> io::Result<(SocketAddr, Serve<TcpListener, Router, Router>)> {
    let router = build_app(BookStore::new());

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Listening on {}", local_addr);

    Ok((local_addr, axum::serve(listener, router)))
}
