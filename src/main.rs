//! CLI entry point for the travel trends scanner.
//!
//! Provides subcommands for running a full destination scan against the
//! trends provider and for inspecting the batch plan without querying.

mod infra;

use crate::infra::serpapi::client::SerpApiClient;
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use trend_scanner::{batch::plan_batches, config::AppConfig, output, query::build_query, scan};

#[derive(Parser)]
#[command(name = "trend_scanner")]
#[command(about = "A tool to scan travel search trends and rate destinations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan all configured destinations and write a fresh snapshot
    Scan {
        /// Path to the JSON settings document
        #[arg(short, long, default_value = "config.json")]
        config: String,

        /// JSON file to write destination records to
        #[arg(short, long, default_value = "data/trends.json")]
        output: String,
    },
    /// Show the planned request batches without spending API quota
    Batches {
        /// Path to the JSON settings document
        #[arg(short, long, default_value = "config.json")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/trend_scanner.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("trend_scanner.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { config, output } => {
            let config = AppConfig::load(Path::new(&config))?;

            info!(
                anchor = %config.settings.anchor_city,
                scale = config.settings.visual_scale,
                geo = %config.settings.geo,
                timeframe = %config.settings.timeframe,
                "Config loaded"
            );

            let api_key = std::env::var("SERPAPI_API_KEY").expect("SERPAPI_API_KEY must be set");
            let client = SerpApiClient::new(api_key);

            let output_path = Path::new(&output);
            let previous = output::load_previous(output_path);
            let today = Utc::now().date_naive();

            let records = scan::run_scan(&client, &config, &previous, today).await;

            info!(records = records.len(), "Scan complete, writing snapshot");
            output::write_records(output_path, &records)?;
            info!(path = %output_path.display(), "Snapshot written");
        }
        Commands::Batches { config } => {
            let config = AppConfig::load(Path::new(&config))?;
            let anchor_query = build_query(&config.settings.anchor_city);
            let cities = config.cities();
            let batches = plan_batches(&cities, scan::BATCH_SIZE, &anchor_query);

            for (i, batch) in batches.iter().enumerate() {
                info!(batch = i + 1, queries = ?batch.queries, "Planned batch");
            }

            info!(
                destinations = cities.len(),
                batches = batches.len(),
                "Batch plan complete"
            );
        }
    }

    Ok(())
}
