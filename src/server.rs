// src/server.rs
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::Config;

/// Binds exactly `HOST:PORT`. A busy port is an error, never a silent move to another port.
pub async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind(SocketAddr::from((config.host, config.port))).await
}
