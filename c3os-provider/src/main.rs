//! Provider binary invoked by the c3os bus.
//!
//! Usage: `c3os-provider <EVENT>` with the event document on stdin. The
//! response document is written to stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use c3os_provider::config::ProviderConfig;
use c3os_provider::factory_from_config;
use c3os_provider::primitives::EventType;
use c3os_provider::telemetry;
use clap::Parser;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "c3os-provider", version, about = "c3os bus provider plugin")]
struct Cli {
    /// Event dispatched by the bus, e.g. `agent.interactive-install`.
    event: EventType,

    /// Optional TOML configuration file.
    #[arg(long, env = "C3OS_PROVIDER_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        ProviderConfig::load(cli.config.as_deref()).context("failed to load provider config")?;
    telemetry::init_tracing(&config.log.filter).context("failed to initialize logging")?;
    debug!(event = %cli.event, config = ?cli.config, "provider started");

    let factory = factory_from_config(&config).context("invalid identity settings")?;
    factory
        .run(&cli.event, io::stdin().lock(), io::stdout().lock())
        .with_context(|| format!("failed to handle event {}", cli.event))?;

    Ok(())
}
