//! Infrastructure health dashboard CLI.
//!
//! Polls the cluster once, classifies node, backup, pod and deployment state,
//! prints the report and exits.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use indicatif::ProgressBar;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dashboard::{
    collect_report, ui, ConnectOptions, DashboardConfig, DashboardError, KubeProvider,
};

/// Point-in-time health summary for a Kubernetes cluster.
#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Show node, backup, deployment and pod health for a Kubernetes cluster")]
#[command(version)]
struct Cli {
    /// Path to the kubeconfig file (defaults to ~/.kube/config).
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one.
    #[arg(long, env = "DASHBOARD_CONTEXT")]
    context: Option<String>,

    /// Output format (text or json).
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

async fn run(cli: &Cli, spinner: Option<&ProgressBar>) -> Result<()> {
    let config = DashboardConfig::default();
    let options = ConnectOptions {
        kubeconfig: cli.kubeconfig.clone(),
        context: cli.context.clone(),
    };

    let report = match KubeProvider::connect(&options).await {
        Ok(provider) => Ok(collect_report(&provider, &config, Utc::now()).await),
        Err(e) => Err(e),
    };

    clear_spinner(spinner);
    let report = report?;

    debug!(warnings = report.warnings.len(), "Rendering report");

    match cli.format {
        OutputFormat::Text => ui::print_report(&report, &config),
        OutputFormat::Json => {
            let json = ui::render_json(&report).context("Failed to serialize health report")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn clear_spinner(spinner: Option<&ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let default_filter = if cli.verbose {
        "info,dashboard=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Owned here so an interrupt can still clear it
    let spinner = matches!(cli.format, OutputFormat::Text).then(ui::connecting_spinner);

    tokio::select! {
        result = run(&cli, spinner.as_ref()) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                match e.downcast_ref::<DashboardError>() {
                    Some(err) if err.is_connection() => {
                        ui::print_error(
                            "Could not load kubeconfig. Make sure kubectl is configured.",
                        );
                        debug!(error = %err, "Connection failed");
                    }
                    _ => ui::print_fatal(&format!("{e:#}")),
                }
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            clear_spinner(spinner.as_ref());
            ui::print_interrupted();
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_spinner_finishes_bar() {
        let spinner = ProgressBar::hidden();
        clear_spinner(Some(&spinner));
        assert!(spinner.is_finished());

        clear_spinner(None);
    }

    #[test]
    fn test_cli_defaults_to_text() {
        let cli = Cli::parse_from(["dashboard"]);
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(cli.kubeconfig.is_none());
    }
}
