//! The managed chart version value.
//!
//! `ChartVersion` is the shared output of both extractors: three integers
//! extracted from either a `helm ls` chart identifier or a `Chart.yaml`
//! name/version pair. A version is only ever constructed for the managed
//! chart family; anything else yields `None`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Name of the chart family this tooling is responsible for version-gating.
pub const MANAGED_CHART_NAME: &str = "auto-deploy-app";

/// `<name>-MAJOR.MINOR.PATCH` as printed in the `Chart` column of
/// `helm ls`. Anchored at the start; trailing characters after the patch
/// number are ignored.
static CHART_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)-(\d+)\.(\d+)\.(\d+)").unwrap());

/// Leading `MAJOR.MINOR.PATCH` of a `Chart.yaml` version field. Pre-release
/// and build suffixes after the patch number are ignored.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").unwrap());

/// Version of an `auto-deploy-app` chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ChartVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract a version from a chart identifier like
    /// `auto-deploy-app-1.2.3`.
    ///
    /// Returns `None` unless the leading name component is the managed
    /// chart name and a full numeric triple follows it.
    pub fn from_chart_identifier(chart: &str) -> Option<Self> {
        let caps = CHART_ID_RE.captures(chart)?;
        if &caps[1] != MANAGED_CHART_NAME {
            return None;
        }
        Self::from_captures(&caps, 2)
    }

    /// Extract a version from the declared `name`/`version` pair of a chart
    /// manifest.
    pub fn from_declared(name: &str, version: &str) -> Option<Self> {
        if name != MANAGED_CHART_NAME {
            return None;
        }
        let caps = VERSION_RE.captures(version)?;
        Self::from_captures(&caps, 1)
    }

    // Numbers too large for u32 read as "not a parseable version".
    fn from_captures(caps: &regex::Captures<'_>, first: usize) -> Option<Self> {
        let major = caps[first].parse().ok()?;
        let minor = caps[first + 1].parse().ok()?;
        let patch = caps[first + 2].parse().ok()?;
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for ChartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
