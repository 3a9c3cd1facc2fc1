//! Upgrade compatibility rule and operator override.
//!
//! The rule is a pure function of two versions: upgrades must stay within
//! one major-version line, with the single legacy exception that v1 charts
//! may replace v0 charts. Operators can override an incompatible upgrade
//! with an environment flag keyed by the candidate's major number.

use log::warn;
use serde::Serialize;

use crate::chart::version::ChartVersion;

/// Environment flag prefix; the candidate's major number is appended, e.g.
/// `AUTO_DEVOPS_FORCE_DEPLOY_V2`.
pub const FORCE_DEPLOY_ENV_PREFIX: &str = "AUTO_DEVOPS_FORCE_DEPLOY_V";

/// Whether upgrading from `previous` to `candidate` stays within a
/// compatible chart line. Minor and patch numbers never affect the
/// decision.
pub fn upgrade_compatible(candidate: &ChartVersion, previous: &ChartVersion) -> bool {
    // The v0 and v1 chart lines are compatible. One-directional only.
    if candidate.major == 1 && previous.major == 0 {
        return true;
    }

    candidate.major == previous.major
}

/// Check the operator override against the process environment.
pub fn force_deploy_requested(candidate: &ChartVersion) -> bool {
    force_deploy_requested_with(candidate, |name| std::env::var(name).ok())
}

/// Check the operator override through an injectable lookup.
///
/// The flag counts as set for any non-empty value, `"false"` included;
/// unsetting the variable is the only way to clear it.
pub fn force_deploy_requested_with<F>(candidate: &ChartVersion, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let flag = format!("{}{}", FORCE_DEPLOY_ENV_PREFIX, candidate.major);
    lookup(&flag).is_some_and(|value| !value.is_empty())
}

/// Outcome of gating one upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// No managed release installed yet; nothing to gate
    FirstInstall,
    /// Candidate and installed chart share a compatible major line
    Compatible,
    /// Major lines differ but the operator override is set
    ForceDeployed,
    /// Major lines differ and no override is set
    Incompatible,
}

impl GateOutcome {
    /// Whether the deploy pipeline may proceed.
    pub fn allows_deploy(&self) -> bool {
        !matches!(self, GateOutcome::Incompatible)
    }
}

/// Evaluate the gate for a candidate chart against whatever is installed.
///
/// `previous` is `None` on a first install. The override lookup is
/// injectable so the decision stays testable without touching the real
/// environment; pass `|name| std::env::var(name).ok()` in production.
pub fn evaluate_upgrade<F>(
    candidate: &ChartVersion,
    previous: Option<&ChartVersion>,
    lookup: F,
) -> GateOutcome
where
    F: Fn(&str) -> Option<String>,
{
    let previous = match previous {
        Some(previous) => previous,
        None => return GateOutcome::FirstInstall,
    };

    if upgrade_compatible(candidate, previous) {
        GateOutcome::Compatible
    } else if force_deploy_requested_with(candidate, lookup) {
        warn!(
            "forcing deploy of {} over incompatible installed chart {}",
            candidate, previous
        );
        GateOutcome::ForceDeployed
    } else {
        GateOutcome::Incompatible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_same_major_is_compatible() {
        assert!(upgrade_compatible(
            &ChartVersion::new(1, 9, 0),
            &ChartVersion::new(1, 0, 7)
        ));
    }

    #[test]
    fn test_v1_over_v0_is_compatible() {
        assert!(upgrade_compatible(
            &ChartVersion::new(1, 0, 0),
            &ChartVersion::new(0, 17, 4)
        ));
    }

    #[test]
    fn test_v0_over_v1_is_incompatible() {
        // The legacy exception does not apply to downgrades.
        assert!(!upgrade_compatible(
            &ChartVersion::new(0, 17, 4),
            &ChartVersion::new(1, 0, 0)
        ));
    }

    #[test]
    fn test_major_bump_is_incompatible() {
        assert!(!upgrade_compatible(
            &ChartVersion::new(2, 0, 0),
            &ChartVersion::new(1, 9, 9)
        ));
    }

    #[test]
    fn test_force_deploy_flag_set() {
        let candidate = ChartVersion::new(2, 0, 0);
        let lookup = |name: &str| {
            assert_eq!(name, "AUTO_DEVOPS_FORCE_DEPLOY_V2");
            Some("true".to_string())
        };
        assert!(force_deploy_requested_with(&candidate, lookup));
    }

    #[test]
    fn test_force_deploy_flag_unset() {
        assert!(!force_deploy_requested_with(&ChartVersion::new(2, 0, 0), no_env));
    }

    #[test]
    fn test_force_deploy_empty_value_does_not_count() {
        let lookup = |_: &str| Some(String::new());
        assert!(!force_deploy_requested_with(&ChartVersion::new(2, 0, 0), lookup));
    }

    #[test]
    fn test_force_deploy_false_still_counts() {
        // Any present value enables the override, "false" included.
        let lookup = |_: &str| Some("false".to_string());
        assert!(force_deploy_requested_with(&ChartVersion::new(2, 0, 0), lookup));
    }

    #[test]
    fn test_evaluate_first_install() {
        let outcome = evaluate_upgrade(&ChartVersion::new(3, 0, 0), None, no_env);
        assert_eq!(outcome, GateOutcome::FirstInstall);
        assert!(outcome.allows_deploy());
    }

    #[test]
    fn test_evaluate_compatible() {
        let previous = ChartVersion::new(2, 1, 0);
        let outcome = evaluate_upgrade(&ChartVersion::new(2, 4, 1), Some(&previous), no_env);
        assert_eq!(outcome, GateOutcome::Compatible);
    }

    #[test]
    fn test_evaluate_incompatible() {
        let previous = ChartVersion::new(1, 0, 7);
        let outcome = evaluate_upgrade(&ChartVersion::new(2, 0, 0), Some(&previous), no_env);
        assert_eq!(outcome, GateOutcome::Incompatible);
        assert!(!outcome.allows_deploy());
    }

    #[test]
    fn test_evaluate_forced() {
        let previous = ChartVersion::new(1, 0, 7);
        let lookup = |name: &str| (name == "AUTO_DEVOPS_FORCE_DEPLOY_V2").then(|| "1".to_string());
        let outcome = evaluate_upgrade(&ChartVersion::new(2, 0, 0), Some(&previous), lookup);
        assert_eq!(outcome, GateOutcome::ForceDeployed);
        assert!(outcome.allows_deploy());
    }

    proptest! {
        #[test]
        fn prop_same_major_always_compatible(major in 0u32..100, a in 0u32..1000, b in 0u32..1000, c in 0u32..1000, d in 0u32..1000) {
            prop_assert!(upgrade_compatible(
                &ChartVersion::new(major, a, b),
                &ChartVersion::new(major, c, d)
            ));
        }

        #[test]
        fn prop_v1_over_v0_always_compatible(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000, d in 0u32..1000) {
            prop_assert!(upgrade_compatible(
                &ChartVersion::new(1, a, b),
                &ChartVersion::new(0, c, d)
            ));
        }

        #[test]
        fn prop_major_bump_never_compatible(previous_major in 1u32..100, bump in 1u32..100, a in 0u32..1000, b in 0u32..1000) {
            prop_assert!(!upgrade_compatible(
                &ChartVersion::new(previous_major + bump, a, b),
                &ChartVersion::new(previous_major, b, a)
            ));
        }
    }
}
