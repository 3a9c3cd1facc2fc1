//! `chart-gate check`: the full upgrade gate.
//!
//! Compares the candidate chart on disk with whatever the release currently
//! runs and decides whether the deploy pipeline may proceed. Exit code 0
//! lets the deploy continue (first install, compatible, or forced); exit
//! code 2 blocks it.

use std::path::PathBuf;
use std::process;

use colored::Colorize;
use log::info;

use crate::chart::{
    self, CHART_MANIFEST_FILE, ChartVersion, FORCE_DEPLOY_ENV_PREFIX, GateOutcome,
    MANAGED_CHART_NAME,
};
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn handle_check(
    release: String,
    input: Option<PathBuf>,
    chart_dir: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let data = super::read_release_list(input.as_deref())?;
    let previous = chart::installed_chart_version(&data, &release)?;

    let candidate = match chart::local_chart_version(&chart_dir)? {
        Some(candidate) => candidate,
        None => {
            // The pipeline pointed the gate at a chart it does not manage.
            eprintln!(
                "{} does not declare the managed chart {}, refusing to gate",
                chart_dir.join(CHART_MANIFEST_FILE).display(),
                MANAGED_CHART_NAME
            );
            process::exit(2);
        }
    };

    let outcome = chart::evaluate_upgrade(&candidate, previous.as_ref(), |name| {
        std::env::var(name).ok()
    });
    info!("gate outcome for release {}: {:?}", release, outcome);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "release": release,
                "chart": MANAGED_CHART_NAME,
                "candidate": candidate,
                "installed": previous,
                "outcome": outcome,
                "allows_deploy": outcome.allows_deploy(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_decision(&release, &candidate, previous.as_ref(), outcome),
    }

    if !outcome.allows_deploy() {
        if let Some(previous) = previous {
            eprintln!(
                "Detected a major version difference between the candidate chart ({}) and the installed release ({}).",
                candidate, previous
            );
        }
        eprintln!(
            "Set {}{}=true to force the upgrade anyway.",
            FORCE_DEPLOY_ENV_PREFIX, candidate.major
        );
        process::exit(2);
    }

    Ok(())
}

fn print_decision(
    release: &str,
    candidate: &ChartVersion,
    previous: Option<&ChartVersion>,
    outcome: GateOutcome,
) {
    println!("Gating upgrade of release: {}", release);
    println!("├── Candidate chart: {}", candidate);
    match previous {
        Some(previous) => println!("├── Installed chart: {}", previous),
        None => println!("├── Installed chart: none"),
    }

    let decision = match outcome {
        GateOutcome::FirstInstall => "first install, nothing to gate".green(),
        GateOutcome::Compatible => "compatible".green(),
        GateOutcome::ForceDeployed => "incompatible, deploying anyway (override set)".yellow(),
        GateOutcome::Incompatible => "incompatible".red().bold(),
    };
    println!("└── Decision: {}", decision);
}
