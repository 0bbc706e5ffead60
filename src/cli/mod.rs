//! CLI module for the currency exchange service
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Currency Exchange API - exchange rate lookups and currency conversion
#[derive(Parser)]
#[command(name = "currency-exchange-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default mode)
    Serve,
}
