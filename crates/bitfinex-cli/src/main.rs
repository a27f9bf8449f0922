/*
[INPUT]:  CLI arguments, optional YAML configuration file, BFX_* environment
[OUTPUT]: Pretty-printed JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

mod commands;
mod config;

use anyhow::{Context, Result, anyhow};
use bitfinex_adapter::BitfinexClient;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "bitfinex-cli", version, about = "Bitfinex v1 REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    debug!(
        base_url = %config.client.base_url,
        version = %config.client.version,
        "configuration loaded"
    );

    let credentials = config.credentials()?;
    if args.command.is_private() && credentials.is_none() {
        return Err(anyhow!(
            "{:?} needs API credentials; set {} and {}",
            args.command,
            config::API_KEY_ENV,
            config::API_SECRET_ENV
        ));
    }

    let client = BitfinexClient::build(config.client, credentials).context("build client")?;
    let response = args.command.run(&client).await.context("request failed")?;

    if response.error {
        warn!(status = response.status.as_u16(), "exchange returned an error response");
    } else {
        info!(status = response.status.as_u16(), "request complete");
    }

    let rendered = serde_json::to_string_pretty(&response.into_value()).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    config.apply_env();
    Ok(config)
}
