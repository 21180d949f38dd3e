//! Mock banking API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server (request id, trace, CORS, timeout)
//!                          │
//!                          ▼
//!                     header gate ──▶ 495
//!                          │
//!                          ▼
//!                     api handlers ──▶ 453/454/456/470/473/474/477
//!                          │
//!                          ▼
//!                  canned payloads + Store (messages, SOF, password)
//! ```

use std::path::PathBuf;

use clap::Parser;

use bank_mock_api::config::{load_config, BankConfig};
use bank_mock_api::lifecycle;
use bank_mock_api::observability::logging;

#[derive(Parser)]
#[command(name = "bank-mock-api")]
#[command(about = "Mock banking REST backend", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BankConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        "bank-mock-api starting"
    );

    lifecycle::run(config).await?;
    Ok(())
}
