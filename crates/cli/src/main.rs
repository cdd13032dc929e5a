use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use expertdb_client::api::health::health_request;
use expertdb_client::{ApiClient, ClientConfig, Envelope, SessionEvent};
use expertdb_core::models::HealthStatus;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;

use command::{Cli, Command};

const DEFAULT_FILTER: &str = "expertdb_client=info,expertdb_cli=info";
const DEBUG_FILTER: &str = "expertdb_client=debug,expertdb_cli=debug";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let default_filter = if config.as_ref().is_ok_and(|c| c.debug) {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid client configuration");
            return Ok(ExitCode::from(2));
        }
    };

    let client = ApiClient::new(&config).context("Failed to build API client")?;
    tracing::debug!(base_url = %config.transport.base_url, "API client ready");

    if let Ok(token) = std::env::var("EXPERTDB_TOKEN") {
        if !token.trim().is_empty() {
            client.session().set_token(token.trim());
            tracing::debug!("Session seeded from EXPERTDB_TOKEN");
        }
    }
    let mut events = client.subscribe();

    let success = run(&client, &config, cli.command).await?;

    if let Ok(SessionEvent::Expired) = events.try_recv() {
        tracing::warn!("Session expired, set a fresh EXPERTDB_TOKEN or log in again");
    }

    Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(client: &ApiClient, config: &ClientConfig, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Health => {
            let envelope: Envelope<HealthStatus> = client
                .request_with_retry(health_request(), &config.retry)
                .await;
            print(&envelope)
        }
        Command::Stats => print(&client.get_overall_stats().await),
        Command::Experts { limit, offset } => {
            print(&client.get_experts(limit, offset, None).await)
        }
        Command::Expert { id } => print(&client.get_expert_by_id(id).await),
        Command::Login { email, password } => {
            // The token stays in the session; only the profile is shown.
            let envelope = client.login(&email, &password).await.map(|login| login.user);
            print(&envelope)
        }
    }
}

/// Write the envelope to stdout as pretty JSON and report its outcome.
fn print<T: Serialize>(envelope: &Envelope<T>) -> anyhow::Result<bool> {
    let json = serde_json::to_string_pretty(envelope).context("Failed to render response")?;
    println!("{json}");
    Ok(envelope.is_success())
}
