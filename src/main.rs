//! IP reputation check CLI.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ip_reputation_check::providers::abuseipdb::AbuseIPDBProvider;
use ip_reputation_check::{check_batch, check_single, Config};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ip-reputation-check")]
#[command(about = "Check IP addresses against AbuseIPDB and report risk levels as JSON")]
#[command(version)]
struct Cli {
    /// Path to an optional YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = "warn")]
    log_level: String,

    /// Print example configuration and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single IP address
    Check {
        /// IP address to check (e.g., 118.25.6.39)
        #[arg(long, env = "IP_ADDRESS", value_name = "IP")]
        ip_address: Option<String>,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Check a comma-separated list of IP addresses
    Batch {
        /// Comma-separated IP addresses
        #[arg(long, env = "IP_ADDRESSES", value_name = "IPS")]
        ip_addresses: Option<String>,

        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Your AbuseIPDB API key
    #[arg(long, env = "ABUSEIPDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Score threshold for HIGH risk classification [default: 70]
    #[arg(long, env = "CONFIDENCE_THRESHOLD", allow_negative_numbers = true)]
    confidence_threshold: Option<f64>,
}

impl LookupArgs {
    /// Flags and environment win over the config file.
    fn resolve(self, config: &Config) -> (Option<String>, f64) {
        let api_key = self.api_key.or_else(|| config.abuseipdb.api_key.clone());
        let threshold = self
            .confidence_threshold
            .unwrap_or(config.thresholds.confidence);
        (api_key, threshold)
    }
}

fn emit<T: Serialize>(output: &ip_reputation_check::Output<T>) -> Result<i32> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.to_json_pretty()?)?;
    stdout.flush()?;
    Ok(output.code())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle --print-config
    if cli.print_config {
        println!("{}", Config::example());
        return Ok(());
    }

    // Logs go to stderr; stdout carries only the JSON document.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let Some(command) = cli.command else {
        anyhow::bail!("no command given; use `check` or `batch` (see --help)");
    };

    let provider = AbuseIPDBProvider::new(
        config.abuseipdb.endpoint.clone(),
        config.abuseipdb.timeout(),
    )?;
    debug!(endpoint = provider.endpoint(), "AbuseIPDB provider ready");

    let code = match command {
        Command::Check { ip_address, lookup } => {
            let (api_key, threshold) = lookup.resolve(&config);
            let output = check_single(
                ip_address.as_deref(),
                api_key.as_deref(),
                threshold,
                &provider,
            )
            .await;
            emit(&output)?
        }
        Command::Batch {
            ip_addresses,
            lookup,
        } => {
            let (api_key, threshold) = lookup.resolve(&config);
            let output = check_batch(
                ip_addresses.as_deref(),
                api_key.as_deref(),
                threshold,
                &provider,
            )
            .await;
            emit(&output)?
        }
    };

    std::process::exit(code);
}
