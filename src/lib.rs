//! Memescan Client Library
//!
//! Async client for the Memescan analysis service: contract risk analysis,
//! bundle detection, trend analysis and real-time wallet monitoring.
//!
//! ```no_run
//! # async fn run() -> memescan_client::Result<()> {
//! use memescan_client::RemoteAnalysisClient;
//!
//! let client = RemoteAnalysisClient::new("http://localhost:8000")?;
//! let report = client.analyze_contract("0xABC").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;

pub use client::{Endpoint, HttpTransport, RemoteAnalysisClient, Transport};
pub use error::{Error, Result};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing/logging
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only response bodies.
    let installed = match format {
        Some("json") => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}
