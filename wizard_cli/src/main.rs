//! # Clinic Setup CLI
//!
//! Terminal front end for the clinic onboarding wizard. Reads one command
//! per line from stdin (or a script file), redraws the current step after
//! each, and on `launch` writes the finished session as JSON to stdout or
//! the configured export file.

mod commands;
mod config;
mod provisioner;
mod render;
mod shell;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wizard_core::session::WizardSession;

use crate::config::Settings;
use crate::provisioner::{ExportTarget, JsonProvisioner};
use crate::shell::Outcome;

#[derive(Debug, Parser)]
#[command(name = "wizard_cli", version, about = "Clinic setup wizard")]
struct Cli {
    /// Settings file (defaults to ./wizard.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the finished session to this file instead of stdout
    #[arg(long)]
    export: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// tracing filter used when RUST_LOG is unset, e.g. "wizard_core=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(path) = &self.export {
            settings.export_path = Some(path.clone());
        }
        if self.compact {
            settings.pretty_json = false;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = config::load_settings(cli.config.as_deref())?;
    cli.apply_to(&mut settings);
    init_tracing(&settings.log_filter);

    let target = match &settings.export_path {
        Some(path) => ExportTarget::File(path.clone()),
        None => ExportTarget::Stdout,
    };
    info!(?target, pretty = settings.pretty_json, "starting clinic setup wizard");

    let mut session = WizardSession::new();
    let mut provisioner = JsonProvisioner::new(target, settings.pretty_json);
    let mut stdout = io::stdout();

    let outcome = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            shell::run(&mut session, &mut provisioner, BufReader::new(file), &mut stdout)?
        }
        None => shell::run(&mut session, &mut provisioner, io::stdin().lock(), &mut stdout)?,
    };

    match outcome {
        Outcome::Launched => info!("wizard finished"),
        Outcome::Abandoned => info!(patients = session.patients().len(), "wizard left without launching"),
    }
    Ok(())
}
