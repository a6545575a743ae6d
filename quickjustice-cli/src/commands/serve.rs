//! HTTP server command
//!
//! Resolves database settings, builds the pool and runs the API until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use quickjustice_server::config::DEFAULT_BIND;
use quickjustice_server::db::{create_pool, create_pool_lazy};
use quickjustice_server::http::{run_server, ServerConfig};
use quickjustice_server::DatabaseConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "QJ_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (overrides DB_MAX_CONNECTIONS)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Start without waiting for the database to accept a connection
    #[arg(long)]
    pub lazy_connect: bool,
}

/// Apply command line overrides on top of environment settings.
pub(crate) fn resolve_database(
    mut config: DatabaseConfig,
    database_url: Option<String>,
    max_connections: Option<u32>,
) -> DatabaseConfig {
    if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
        config.url = Some(url);
    }
    if let Some(max) = max_connections {
        config.max_connections = max;
    }
    config
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let env_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let db = resolve_database(env_config, args.database_url, args.max_connections);
    let options = db
        .connect_options()
        .context("Invalid database configuration")?;

    tracing::info!("Starting quickjustice server on {}", args.bind);

    let pool = if args.lazy_connect {
        create_pool_lazy(options, db.max_connections)
    } else {
        create_pool(options, db.max_connections)
            .await
            .context("Failed to create database pool")?
    };

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
