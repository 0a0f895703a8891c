//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP server mode.

use crate::{
    ConfigStore, Error, Settings,
    config::ConfigLoader,
    server::app,
    utils::version,
};
use anyhow::Result;
use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Arguments for server mode
///
/// `None` keeps whatever the config file or environment provided.
#[derive(Debug, Default)]
pub struct ServerArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Run server mode with the given arguments
///
/// Returns only when the listener fails; request errors never end the
/// process.
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;
    init_logging(&settings)?;

    tracing::info!(
        "Starting peak-shaving configuration server v{}",
        version::get_version()
    );

    let store = Arc::new(ConfigStore::from_settings(&settings.peakshaving));
    let limits = store.snapshot().await;
    tracing::info!(
        "Initial limits: minimal power {} kW, maximal power {} kvar",
        limits.minimal_power,
        limits.maximal_power
    );

    let app = app::create_app(store);

    let addr = parse_and_bind_address(&settings.server.host, settings.server.port).await?;
    let listener = bind_listener(addr).await?;

    tracing::info!("Server is listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the listening socket
pub async fn bind_listener(addr: SocketAddr) -> crate::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind {}: {}", addr, e)))
}

/// Load settings and apply the command line on top
pub fn resolve_settings(args: &ServerArgs) -> Result<Settings> {
    let mut settings = ConfigLoader::new().load(args.config.as_deref())?;

    if let Some(host) = &args.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    settings.validate()?;
    Ok(settings)
}

/// Install the global log subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Parse host string and pick the address to listen on
///
/// `::` is probed first and falls back to `0.0.0.0` when IPv6 is not
/// available on this host.
pub async fn parse_and_bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    if host == "::" {
        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);
        return match TcpListener::bind(addr).await {
            Ok(_) => {
                tracing::debug!("IPv6 available, using {}", addr);
                Ok(addr)
            }
            Err(e) => {
                let fallback = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
                tracing::warn!(
                    "Could not listen on [::]:{} ({}), falling back to {}",
                    port,
                    e,
                    fallback
                );
                Ok(fallback)
            }
        };
    }

    match host.parse::<IpAddr>() {
        Ok(ip) => Ok(SocketAddr::new(ip, port)),
        Err(_) => anyhow::bail!(
            "Invalid host address: {}. Use an IP address, '::' for IPv6 or '0.0.0.0' for IPv4",
            host
        ),
    }
}
