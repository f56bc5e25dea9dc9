//! Quotewalk main entry point
//!
//! This is the command-line interface for the Quotewalk scraper.

use clap::Parser;
use quotewalk::config::{load_config_with_hash, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quotewalk: follow a quote site's pagination and save every quote as CSV
#[derive(Parser, Debug)]
#[command(name = "quotewalk")]
#[command(version = "1.0.0")]
#[command(about = "Paginated quote scraper", long_about = None)]
struct Cli {
    /// CSV file to write [default: quotes.csv, or the config's output path]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start page, overriding the configured base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Fail on non-success HTTP status codes instead of parsing the body
    #[arg(long)]
    strict_status: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(base_url) = cli.base_url {
        config.site.base_url = base_url;
    }
    if cli.strict_status {
        config.http.strict_status = true;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }

    match quotewalk::run_with_config(&config).await {
        Ok(summary) => {
            tracing::info!(
                "Done: {} quotes from {} pages written to {}",
                summary.records,
                summary.pages,
                summary.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Events go to standard output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotewalk=info,warn"),
            1 => EnvFilter::new("quotewalk=debug,info"),
            2 => EnvFilter::new("quotewalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
