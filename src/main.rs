//! Memescan - command-line client for the Memescan analysis service

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing::error;

use memescan_client::{
    RemoteAnalysisClient, Result,
    cli::{Cli, Command, parse_data_arg},
    config::Config,
    setup_tracing,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_tracing(&cli.log_level, cli.log_format.as_deref()) {
        eprintln!("Failed to setup tracing: {e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(mut config) => {
            if let Some(ref base_url) = cli.base_url {
                config.api.base_url = base_url.clone();
                if let Err(e) = config.validate() {
                    error!("{e}");
                    return ExitCode::FAILURE;
                }
            }
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match RemoteAnalysisClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {e}");
            return ExitCode::FAILURE;
        }
    };

    run(&client, cli.command).await
}

/// Run one analysis and print the response body
async fn run(client: &RemoteAnalysisClient, command: Command) -> ExitCode {
    let result = match command {
        Command::Contract { address } => client.analyze_contract(&address).await,
        Command::Bundles { data } => client.detect_bundles(&parse_data_arg(&data)).await,
        Command::Trends { data } => client.analyze_trends(&parse_data_arg(&data)).await,
        Command::Wallet { address } => client.monitor_wallet(&address).await,
    };

    // Call failures are already logged by the client.
    let Ok(body) = result else {
        return ExitCode::FAILURE;
    };

    match render(&body) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render response: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(body: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(body)?)
}
