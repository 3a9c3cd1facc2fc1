use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level `.chartgate.toml` configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub gate: GateConfig,
}

/// Defaults applied when the matching CLI flags are omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GateConfig {
    /// Release name to inspect
    pub release: Option<String>,

    /// Directory holding the candidate chart
    pub chart_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.gate.release.is_none());
        assert!(config.gate.chart_dir.is_none());
    }

    #[test]
    fn test_gate_section_parses() {
        let config: Config = toml::from_str(
            r#"
[gate]
release = "staging"
chart-dir = "chart"
"#,
        )
        .unwrap();
        assert_eq!(config.gate.release.as_deref(), Some("staging"));
        assert_eq!(config.gate.chart_dir, Some(PathBuf::from("chart")));
    }
}
