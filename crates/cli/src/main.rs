//! Foundry graph CLI.
//!
//! Builds one request-scoped client per invocation, runs a single graph
//! query, and prints the result as JSON or a table. Upstream calls,
//! aggregation and agent parsing live in `crates/client`.
//!
//! `.env` is loaded before argument parsing so it can feed clap's `env`
//! defaults. Logs go to stderr; stdout carries only the query result.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::Context;
use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use foundry_client::{MetricsExporter, TracingConfig, TracingGuard};
use foundry_config::ConfigLoader;

/// Tracing pipeline plus the optional Prometheus listener.
fn init_observability(cli: &Cli) -> anyhow::Result<(TracingGuard, Option<MetricsExporter>)> {
    let mut tracing_config = TracingConfig::new()
        .with_service_name("foundry-cli")
        .with_json(cli.log_json);
    if let Some(endpoint) = &cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let guard = tracing_config.init()?;

    let exporter = cli
        .metrics_bind
        .as_deref()
        .map(MetricsExporter::install)
        .transpose()
        .context("Failed to start metrics exporter")?;

    Ok((guard, exporter))
}

/// Cancel `token` on the first Ctrl+C.
fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => token.cancel(),
            Err(e) => tracing::warn!(error = %e, "Ctrl+C handler unavailable"),
        }
    });
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let (tracing_guard, _metrics_exporter) = match init_observability(&cli) {
        Ok(handles) => handles,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    cancel_on_interrupt(cancel.clone());

    let exit_code = match run_command(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{e:#}");
            e.exit_code()
        }
    };

    tracing_guard.shutdown();
    std::process::exit(exit_code.as_i32());
}
