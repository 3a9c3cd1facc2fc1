//! Error types for the chart gate.
//!
//! The extractors distinguish a soft "no managed chart found" (an `Ok(None)`
//! at the call site, never an error) from hard failures: payloads that are
//! not valid JSON at all, and manifests that cannot be read. Callers branch
//! on "no decision possible" separately from "something is broken".

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartGateError>;

/// Top-level error for CLI and library operations.
#[derive(Debug, Error)]
pub enum ChartGateError {
    /// I/O failure outside the extractors (reading release-list input, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Release-list payload was present but unusable
    #[error(transparent)]
    ReleaseList(#[from] ReleaseListError),

    /// Chart manifest was missing, unreadable, or unparseable
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Report serialization failed
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file problems
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from the release-list extractor.
///
/// "Release not found" and "chart is not the managed chart" are not errors;
/// only a payload that fails to parse as JSON surfaces here.
#[derive(Debug, Error)]
pub enum ReleaseListError {
    /// Non-empty input that is not a valid JSON release listing
    #[error("release list is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Errors from the chart-manifest extractor.
///
/// A missing manifest means the caller pointed the gate at the wrong
/// directory, so it propagates instead of reading as "no managed chart".
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Chart.yaml missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart.yaml present but not valid YAML
    #[error("{} is not valid YAML: {source}", .path.display())]
    MalformedYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file failed to parse
    #[error("failed to parse {}: {reason}", .path.display())]
    ParsingFailed { path: PathBuf, reason: String },
}
