//! `chart-gate local`: report the managed chart version a chart directory
//! declares.

use std::path::PathBuf;
use std::process;

use colored::Colorize;

use crate::chart::{self, CHART_MANIFEST_FILE, MANAGED_CHART_NAME};
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn handle_local(chart_dir: PathBuf, format: OutputFormat) -> Result<()> {
    let version = chart::local_chart_version(&chart_dir)?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "chart_dir": chart_dir,
                "chart": MANAGED_CHART_NAME,
                "found": version.is_some(),
                "version": version,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => match version {
            Some(version) => println!(
                "{} declares {} {}",
                chart_dir.display(),
                MANAGED_CHART_NAME,
                version.to_string().green()
            ),
            None => println!(
                "{} in {} does not declare the managed chart {}",
                CHART_MANIFEST_FILE,
                chart_dir.display(),
                MANAGED_CHART_NAME
            ),
        },
    }

    if version.is_none() {
        process::exit(1);
    }

    Ok(())
}
