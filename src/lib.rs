//! # Chartgate CLI
//!
//! A Rust-based command-line tool that determines which version of the
//! managed `auto-deploy-app` chart a Helm release runs, and gates automated
//! upgrades across breaking major-version boundaries.
//!
//! ## Features
//!
//! - **Release inspection**: parses captured `helm ls --output json` text
//!   and extracts the chart version a named release runs
//! - **Chart inspection**: reads the `Chart.yaml` of a chart on disk
//! - **Upgrade gating**: refuses upgrades that cross a major-version
//!   boundary, with the legacy v0 to v1 transition allowed
//! - **Operator override**: a per-major environment flag forces an
//!   otherwise-blocked deploy
//!
//! ## Example
//!
//! ```rust
//! use chartgate_cli::chart::{installed_chart_version, upgrade_compatible, ChartVersion};
//!
//! let data = r#"{"Releases": [{"Name": "production", "Chart": "auto-deploy-app-1.2.3"}]}"#;
//! let installed = installed_chart_version(data, "production").unwrap().unwrap();
//! assert_eq!(installed, ChartVersion::new(1, 2, 3));
//! assert!(upgrade_compatible(&ChartVersion::new(1, 9, 0), &installed));
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use chart::{ChartVersion, GateOutcome, MANAGED_CHART_NAME};
pub use error::{ChartGateError, Result};
pub use handlers::*;
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release inspected when neither the CLI nor the config names one.
pub const DEFAULT_RELEASE: &str = "production";

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Installed {
            release,
            input,
            format,
        } => handlers::handle_installed(resolve_release(release, config), input, format),
        Commands::Local { chart_dir, format } => {
            handlers::handle_local(resolve_chart_dir(chart_dir, config), format)
        }
        Commands::Check {
            release,
            input,
            chart_dir,
            format,
        } => handlers::handle_check(
            resolve_release(release, config),
            input,
            resolve_chart_dir(chart_dir, config),
            format,
        ),
    }
}

fn resolve_release(flag: Option<String>, config: &Config) -> String {
    flag.or_else(|| config.gate.release.clone())
        .unwrap_or_else(|| DEFAULT_RELEASE.to_string())
}

fn resolve_chart_dir(arg: Option<std::path::PathBuf>, config: &Config) -> std::path::PathBuf {
    arg.or_else(|| config.gate.chart_dir.clone())
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
