//! `triage`: symptom analysis and triage from the command line.
//!
//! Usage:
//!   triage analyze "dry cough and sore throat"
//!   triage assess "chest pain" --location "San Francisco"
//!   triage serve --bind 0.0.0.0:5000
//!   triage resources --urgency high
//!   triage health
//!
//! Settings come from `triage.toml` (or `--config`); flags override them.

mod config;
mod render;

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use triage_client::TriageClient;
use triage_contracts::{error::TriageOutcome, urgency::Urgency};
use triage_core::{AnalysisRunner, SymptomClassifier};

use crate::config::CliConfig;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Symptom intake and triage.
#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Symptom analysis and triage",
    long_about = "Classifies symptom text locally, submits it to a triage service,\n\
                  or runs that service."
)]
struct Cli {
    /// Path to a TOML config file (defaults to ./triage.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify symptom text locally into a condition category.
    Analyze {
        text: String,
        /// Simulated inference delay in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Submit symptom text to the triage service.
    Assess {
        text: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Base URL of the triage service.
        #[arg(long)]
        endpoint: Option<String>,
        /// Fail instead of printing the fallback assessment.
        #[arg(long)]
        strict: bool,
    },
    /// Run the triage service.
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Urgency rules TOML to use instead of the built-in set.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// List nearby resources for an urgency level.
    Resources {
        #[arg(long, default_value = "moderate")]
        urgency: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Check that the triage service is up.
    Health {
        #[arg(long)]
        endpoint: Option<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the service logs at info and everything else
    // stays quiet.
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("triage: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> TriageOutcome<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Command::Analyze { text, delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.analysis.delay_ms));
            let runner = AnalysisRunner::new(SymptomClassifier::new()).with_delay(delay);
            let result = runner.analyze(&text).await?;
            emit(json, &result, || render::analysis(&result));
        }

        Command::Assess {
            text,
            location,
            endpoint,
            strict,
        } => {
            if let Some(url) = endpoint {
                config.client.base_url = url;
            }
            let client = TriageClient::new(config.client)?;
            let result = if strict {
                client.try_submit(&text, &location).await?
            } else {
                client.submit_triage(&text, &location).await
            };
            emit(json, &result, || render::triage(&result));
        }

        Command::Serve {
            bind,
            delay_ms,
            rules,
        } => {
            if let Some(bind) = bind {
                config.service.bind = bind;
            }
            if let Some(ms) = delay_ms {
                config.service.processing_delay_ms = ms;
            }
            if rules.is_some() {
                config.service.rules_path = rules;
            }
            triage_service::serve(config.service).await?;
        }

        Command::Resources {
            urgency,
            location,
            endpoint,
        } => {
            if let Some(url) = endpoint {
                config.client.base_url = url;
            }
            if let Err(e) = urgency.parse::<Urgency>() {
                warn!(error = %e, "service will list every resource kind");
            }
            let client = TriageClient::new(config.client)?;
            let listing = client.resources(&urgency, &location).await?;
            emit(json, &listing, || render::listing(&urgency, &listing));
        }

        Command::Health { endpoint } => {
            if let Some(url) = endpoint {
                config.client.base_url = url;
            }
            let client = TriageClient::new(config.client)?;
            let status = client.health().await?;
            emit(json, &status, || render::health(&status));
        }
    }

    Ok(())
}

/// Print `value` as pretty JSON, or the text rendering.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("triage: failed to encode JSON: {}", e),
        }
    } else {
        print!("{}", text());
    }
}
