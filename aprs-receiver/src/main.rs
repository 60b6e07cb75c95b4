//! aprs-receiver: KISS TNC client for APRS position traffic.
//!
//! Modes:
//! - `listen`: connect to a TNC over TCP, decode in arrival order, and
//!   accumulate per-station history until interrupted
//! - `file`:   run a KISS capture file through the same pipeline and
//!   print the decoded reports

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aprs_core::config;

mod pipeline;

#[derive(Parser)]
#[command(
    name = "aprs-receiver",
    version,
    about = "APRS position-report receiver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a KISS TNC over TCP and track stations
    Listen {
        /// TNC hostname (overrides the config file)
        #[arg(long, env = "APRS_TNC_HOST")]
        host: Option<String>,

        /// TNC TCP port (overrides the config file)
        #[arg(long, env = "APRS_TNC_PORT")]
        port: Option<u16>,

        /// Alternate config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Decode a KISS capture file and print the reports
    File {
        /// Path to a raw KISS byte capture
        file: PathBuf,

        /// Emit newline-delimited JSON instead of monitor text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Listen { host, port, config } => {
            let cfg = match config {
                Some(path) => config::load_config_from(&path),
                None => config::load_config(),
            };
            let host = host.unwrap_or(cfg.tnc.host);
            let port = port.unwrap_or(cfg.tnc.port);
            pipeline::listen(&host, port).await
        }
        Commands::File { file, json } => pipeline::decode_file(&file, json),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
