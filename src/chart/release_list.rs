//! Parser for `helm ls --output json` release listings.
//!
//! The listing is produced by the deploy pipeline, never by this crate:
//! this module only turns the captured text into a `ChartVersion` for a
//! named release, or reports that no managed chart is installed.

use log::debug;
use serde::Deserialize;

use crate::chart::version::ChartVersion;
use crate::error::ReleaseListError;

/// One installed release as reported by Helm.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// The release name
    #[serde(rename = "Name")]
    pub name: String,

    /// Chart identifier, e.g. `auto-deploy-app-1.2.3`
    #[serde(rename = "Chart")]
    pub chart: String,

    /// Revision counter of the release
    #[serde(rename = "Revision")]
    pub revision: Option<u64>,

    /// Last-updated timestamp, as Helm prints it
    #[serde(rename = "Updated")]
    pub updated: Option<String>,

    /// Release status (DEPLOYED, FAILED, ...)
    #[serde(rename = "Status")]
    pub status: Option<String>,

    /// Version of the application packaged by the chart
    #[serde(rename = "AppVersion")]
    pub app_version: Option<String>,

    /// Namespace the release is installed into
    #[serde(rename = "Namespace")]
    pub namespace: Option<String>,
}

/// Top-level `helm ls --output json` document. Unknown fields are ignored;
/// a missing `Releases` key behaves like an empty listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseList {
    #[serde(rename = "Releases", default)]
    pub releases: Vec<Release>,

    /// Pagination cursor, present but unused
    #[serde(rename = "Next")]
    pub next: Option<String>,
}

impl ReleaseList {
    /// Parse a raw `helm ls --output json` payload.
    pub fn parse(data: &str) -> Result<Self, ReleaseListError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Find a release by its exact name (case-sensitive).
    pub fn find_release(&self, release_name: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.name == release_name)
    }
}

/// Determine the installed managed-chart version for `release_name`.
///
/// Helm 2 emits an empty string instead of JSON when there are no releases,
/// so empty input reads as "nothing installed", not as a parse error.
/// Non-empty input that fails to parse is a hard error; a missing release
/// or a non-managed chart is `Ok(None)`.
pub fn installed_chart_version(
    data: &str,
    release_name: &str,
) -> Result<Option<ChartVersion>, ReleaseListError> {
    if data.is_empty() {
        debug!("empty helm output, no releases installed");
        return Ok(None);
    }

    let list = ReleaseList::parse(data)?;

    let release = match list.find_release(release_name) {
        Some(release) => release,
        None => {
            debug!("no release named {} in helm output", release_name);
            return Ok(None);
        }
    };

    debug!("release {} runs chart {}", release.name, release.chart);
    Ok(ChartVersion::from_chart_identifier(&release.chart))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELM_LS_OUTPUT: &str = r#"
    {
      "Next": "",
      "Releases": [
        {
          "Name": "production",
          "Revision": 1,
          "Updated": "Wed Jul  1 08:07:07 2020",
          "Status": "DEPLOYED",
          "Chart": "auto-deploy-app-1.2.3",
          "AppVersion": "",
          "Namespace": "new-sentimentality-19561312-production"
        },
        {
          "Name": "production-canary",
          "Revision": 2,
          "Updated": "Wed Jul  1 11:45:16 2020",
          "Status": "DEPLOYED",
          "Chart": "auto-deploy-app-4.5.6",
          "AppVersion": "",
          "Namespace": "new-sentimentality-19561312-production"
        },
        {
          "Name": "production-postgresql",
          "Revision": 9,
          "Updated": "Mon Jul 13 11:37:20 2020",
          "Status": "DEPLOYED",
          "Chart": "postgresql-8.2.1",
          "AppVersion": "11.6.0",
          "Namespace": "new-sentimentality-19561312-production"
        }
      ]
    }
    "#;

    #[test]
    fn test_finds_release_version() {
        let version = installed_chart_version(HELM_LS_OUTPUT, "production")
            .unwrap()
            .unwrap();
        assert_eq!(version, ChartVersion::new(1, 2, 3));
    }

    #[test]
    fn test_finds_canary_release_version() {
        let version = installed_chart_version(HELM_LS_OUTPUT, "production-canary")
            .unwrap()
            .unwrap();
        assert_eq!(version, ChartVersion::new(4, 5, 6));
    }

    #[test]
    fn test_unknown_release_is_not_found() {
        let version = installed_chart_version(HELM_LS_OUTPUT, "production-unknown").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn test_non_managed_chart_is_not_found() {
        let version = installed_chart_version(HELM_LS_OUTPUT, "production-postgresql").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn test_empty_input_is_not_found() {
        let version = installed_chart_version("", "production").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let result = installed_chart_version("test", "production");
        assert!(matches!(result, Err(ReleaseListError::MalformedJson(_))));
    }

    #[test]
    fn test_missing_releases_key_is_not_found() {
        let version = installed_chart_version(r#"{"Next": ""}"#, "production").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn test_release_fields_deserialize() {
        let list = ReleaseList::parse(HELM_LS_OUTPUT).unwrap();
        let release = list.find_release("production-postgresql").unwrap();
        assert_eq!(release.revision, Some(9));
        assert_eq!(release.status.as_deref(), Some("DEPLOYED"));
        assert_eq!(release.app_version.as_deref(), Some("11.6.0"));
    }
}
