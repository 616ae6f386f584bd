//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

/// Memescan analysis client
#[derive(Parser, Debug)]
#[command(name = "memescan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "MEMESCAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service (overrides config)
    #[arg(long, env = "MEMESCAN_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        env = "MEMESCAN_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json)
    #[arg(long, env = "MEMESCAN_LOG_FORMAT", global = true)]
    pub log_format: Option<String>,

    /// Analysis to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Risk analysis for a token contract
    Contract {
        /// Contract address
        address: String,
    },

    /// Detect bundled buys in transaction data
    Bundles {
        /// Transaction data (JSON, or a plain string)
        data: String,
    },

    /// Trend analysis over market data
    Trends {
        /// Market data (JSON, or a plain string)
        data: String,
    },

    /// Real-time activity for a wallet
    Wallet {
        /// Wallet address
        address: String,
    },
}

/// Interpret a data argument: valid JSON is sent as JSON, anything else as a string.
///
/// A bare `null` stays the string `"null"` so the parameter is always sent.
#[must_use]
pub fn parse_data_arg(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(Value::Null) | Err(_) => Value::String(raw.to_string()),
        Ok(value) => value,
    }
}
