//! MLflow authorization gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                   GATEWAY                    │
//!   Client Request      │  ┌────────┐    ┌──────────┐    ┌──────────┐  │
//!   ────────────────────┼─▶│  http  │───▶│ gateway  │───▶│  authz   │──┼──▶ Keycloak UMA
//!                       │  │ server │    │ handler  │◀───│  client  │◀─┼─── decision
//!                       │  └────────┘    └────┬─────┘    └──────────┘  │
//!                       │                     │ allowed                │
//!                       │                     ▼                        │
//!   Client Response     │  ┌────────┐    ┌──────────┐                  │
//!   ◀───────────────────┼──│response│◀───│  proxy   │──────────────────┼──▶ MLflow
//!                       │  │ relay  │    │forwarder │◀─────────────────┼─── tracking server
//!                       │  └────────┘    └──────────┘                  │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use mlflow_gateway::config::loader::ENV_BIND_ADDRESS;
use mlflow_gateway::config::{load_config, Environment, LogFormat};
use mlflow_gateway::observability::init_logging;
use mlflow_gateway::{GatewayServer, Shutdown};

#[derive(Parser)]
#[command(name = "mlflow-gateway")]
#[command(about = "Authorizing gateway in front of an MLflow tracking server", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log format (pretty or json).
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut env = Environment::from_process();
    if let Some(bind) = cli.bind {
        env.set(ENV_BIND_ADDRESS, bind);
    }

    let mut config = load_config(cli.config.as_deref(), &env)?;
    if let Some(format) = cli.log_format {
        config.observability.log_format = format;
    }

    if cli.check {
        println!("configuration OK");
        return Ok(());
    }

    init_logging(&config.observability)?;

    tracing::info!("mlflow-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tracking_server = %config.upstream.tracking_server_url,
        policy_service = %config.upstream.uma_url,
        client_id = %config.upstream.client_id,
        verify_tls = config.upstream.verify_tls,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = GatewayServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
