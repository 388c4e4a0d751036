//! HTTP server exposing classification and the session history.
//!
//! One `History` lives for the lifetime of the process; every non-blank
//! `POST /classify` prepends to it unless the request opts out.

mod error;
mod handlers;
mod middleware;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

use crate::error::AppError;
use log::info;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3333;

/// Environment variable consulted when no port is given on the command line.
pub const PORT_ENV: &str = "SENTIMENT_PORT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build a config from command-line values, falling back to `env_port`
    /// (the value of `SENTIMENT_PORT`) and then to the defaults.
    pub fn resolve(
        host: Option<IpAddr>,
        port: Option<u16>,
        env_port: Option<&str>,
    ) -> Result<Self, AppError> {
        let defaults = Self::default();
        let port = match (port, env_port) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw.trim().parse().map_err(|e| {
                AppError::parse(format!("{PORT_ENV}={raw:?} is not a valid port: {e}"))
            })?,
            (None, None) => defaults.port,
        };
        Ok(Self {
            host: host.unwrap_or(defaults.host),
            port,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind {addr}: {e}")))?;

    info!("Listening on http://{}", listener.local_addr()?);

    let app = build_router(AppState::shared());
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::server(e.to_string()))
}
