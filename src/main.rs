// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "codelens")]
#[command(about = "QR scan-result classification and dispatch")]
#[command(version = codelens::constants::app_info::version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode QR codes from an image file
    Scan {
        /// Path to the image file
        image: PathBuf,

        /// Dispatch the first decoded payload instead of just listing
        #[arg(short, long)]
        open: bool,
    },

    /// Classify a payload and dispatch it (open a handler or show text)
    Dispatch {
        /// The raw payload (decoded text) to dispatch
        payload: String,
    },

    /// Classify a payload and show the resolved handler without launching
    Classify {
        /// The raw payload (decoded text) to classify
        payload: String,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(short, long)]
        init: bool,
    },

    /// Show cached platform capabilities
    Capabilities {
        /// Re-probe instead of reading the cache
        #[arg(short, long)]
        refresh: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=codelens=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { image, open } => cli::scan_image(image, open),
        Commands::Dispatch { payload } => cli::dispatch_payload(&payload),
        Commands::Classify { payload } => cli::classify_payload(&payload),
        Commands::Config { init } => cli::show_config(init),
        Commands::Capabilities { refresh } => cli::show_capabilities(refresh),
    }
}
