//! `chart-gate installed`: report the managed chart version an installed
//! release runs.

use std::path::PathBuf;
use std::process;

use colored::Colorize;

use crate::chart::{self, MANAGED_CHART_NAME};
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn handle_installed(
    release: String,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let data = super::read_release_list(input.as_deref())?;
    let version = chart::installed_chart_version(&data, &release)?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "release": release,
                "chart": MANAGED_CHART_NAME,
                "found": version.is_some(),
                "version": version,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => match version {
            Some(version) => println!(
                "{} runs {} {}",
                release,
                MANAGED_CHART_NAME,
                version.to_string().green()
            ),
            None => println!(
                "{} does not run a managed {} chart",
                release, MANAGED_CHART_NAME
            ),
        },
    }

    if version.is_none() {
        process::exit(1);
    }

    Ok(())
}
