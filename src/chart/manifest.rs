//! `Chart.yaml` manifest reader.
//!
//! Reads the chart present on disk, typically the candidate the pipeline is
//! about to deploy. A missing manifest is a caller-side setup bug and
//! propagates as an error; a chart that is simply not the managed one
//! reads as "not found".

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::chart::version::ChartVersion;
use crate::error::ManifestError;

/// File name Helm requires for chart metadata.
pub const CHART_MANIFEST_FILE: &str = "Chart.yaml";

/// The subset of `Chart.yaml` the gate cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartManifest {
    /// The name of the chart
    pub name: String,

    /// The declared chart version
    pub version: String,

    /// The chart API version (v1 or v2)
    #[serde(rename = "apiVersion")]
    pub api_version: Option<String>,

    /// A single-sentence description of the chart
    pub description: Option<String>,

    /// A URL to an image to be used as an icon
    pub icon: Option<String>,

    /// The version of the app that the chart contains
    #[serde(rename = "appVersion")]
    pub app_version: Option<String>,
}

impl ChartManifest {
    /// Load `Chart.yaml` from a chart directory.
    pub fn load(chart_dir: &Path) -> Result<Self, ManifestError> {
        let path = chart_dir.join(CHART_MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|e| ManifestError::Read {
            path: path.clone(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ManifestError::MalformedYaml { path, source: e })
    }
}

/// Determine the managed-chart version declared by the chart in `chart_dir`.
pub fn local_chart_version(chart_dir: &Path) -> Result<Option<ChartVersion>, ManifestError> {
    let manifest = ChartManifest::load(chart_dir)?;
    debug!(
        "{} declares chart {} version {}",
        CHART_MANIFEST_FILE, manifest.name, manifest.version
    );
    Ok(ChartVersion::from_declared(&manifest.name, &manifest.version))
}
