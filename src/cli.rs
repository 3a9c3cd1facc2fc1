use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chart-gate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gate auto-deploy chart upgrades across breaking major versions")]
#[command(
    long_about = "Determines which version of the managed auto-deploy-app chart a release runs (from captured `helm ls --output json` text) or a chart directory declares (from Chart.yaml), and decides whether upgrading between the two is safe for an automated pipeline."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the managed chart version an installed release runs
    Installed {
        /// Name of the release to inspect
        #[arg(short, long, value_name = "RELEASE")]
        release: Option<String>,

        /// File holding `helm ls --output json` text (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Report the managed chart version a chart directory declares
    Local {
        /// Path to the chart directory containing Chart.yaml
        #[arg(value_name = "CHART_DIR")]
        chart_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Decide whether deploying the local chart over the installed release is safe
    Check {
        /// Name of the release about to be upgraded
        #[arg(short, long, value_name = "RELEASE")]
        release: Option<String>,

        /// File holding `helm ls --output json` text (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Path to the candidate chart directory
        #[arg(value_name = "CHART_DIR")]
        chart_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
