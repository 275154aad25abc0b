//! zosq agent: prints the outstanding operator actions as JSON.
//!
//! Loads config, applies command-line filter overrides, runs both console
//! queries through the configured console program and writes one JSON
//! response to stdout. Logs go to stderr.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zq_action_tools::ProcessConsole;
use zq_agent::cli::Cli;
use zq_agent::config::AgentConfig;
use zq_agent::runner::ActionRunner;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "zq-agent starting");

    // ── Load config ─────────────────────────────────────────────
    let config = AgentConfig::load(cli.config.as_deref())?;
    tracing::info!(
        program = %config.console.program,
        timeout_secs = config.console.timeout_secs,
        "config loaded"
    );

    // ── Console ─────────────────────────────────────────────────
    let console = ProcessConsole::new(
        &config.console.program,
        Duration::from_secs(config.console.timeout_secs),
    )?;

    // ── Run query ───────────────────────────────────────────────
    let query = config.query.overridden_by(cli.query_overrides());
    let runner = ActionRunner::new(&console)?;
    let response = runner.run(query.to_args()).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
