//! Order Service entry point
//!
//! ```text
//! order_service [--env dev] [--config-dir config] [--port 3000]
//! ```
//!
//! The listening port comes from `--port`, else the `PORT` environment
//! variable, else `gateway.port` in `config/<env>.yaml`, else 3000.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use order_service::config::AppConfig;
use order_service::logging::init_logging;
use order_service::{AppState, Catalog, run_server};

#[derive(Debug, Parser)]
#[command(name = "order_service", version, about = "In-memory order management REST API")]
struct Cli {
    /// Config profile; loads `<config-dir>/<env>.yaml`
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Directory holding the YAML profiles
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Listening port (overrides the config file)
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, from_file) = AppConfig::load(&cli.config_dir, &cli.env)
        .with_context(|| format!("Failed to load config profile '{}'", cli.env))?;
    let config = config.with_port_override(cli.port);

    let _log_guard = init_logging(&config);

    tracing::info!(
        "Starting Order Service {} (build {}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_REV"),
        cli.env
    );
    if !from_file {
        tracing::warn!(
            "No config file at {}/{}.yaml, using defaults",
            cli.config_dir.display(),
            cli.env
        );
    }

    let state = Arc::new(AppState::new(Catalog::seeded()));
    run_server(&config.gateway, state).await
}
