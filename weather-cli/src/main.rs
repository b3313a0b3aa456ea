//! Binary crate for the `weather` command-line client.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive city prompt
//! - Human-friendly rendering of relay results

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod app;
mod cli;
mod relay_client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
