//! Feature-gate boundary
//!
//! Maturity gating reads a process-wide flag set owned by the host. The set
//! is injected as a read-only capability so option validation stays
//! deterministic under test.

use std::collections::HashSet;

/// Gate that must be enabled before beta-maturity options are accepted
pub const POLICY_BETA_OPTIONS_GATE: &str = "PolicyBetaOptions";

/// Gate that must be enabled before alpha-maturity options are accepted
pub const POLICY_ALPHA_OPTIONS_GATE: &str = "PolicyAlphaOptions";

/// Read-only view of the host's feature-gate flags
pub trait FeatureGates {
    /// Check whether the named gate is currently enabled
    fn is_enabled(&self, gate: &str) -> bool;
}

/// Fixed set of enabled gates
///
/// Hosts build one from startup configuration; tests build synthetic states.
#[derive(Debug, Clone, Default)]
pub struct StaticFeatureGates {
    enabled: HashSet<String>,
}

impl StaticFeatureGates {
    /// Create a gate set with nothing enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate set from the given enabled gate names
    pub fn with_enabled<I, S>(gates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// Enable a gate
    pub fn enable(&mut self, gate: impl Into<String>) {
        self.enabled.insert(gate.into());
    }
}

impl FeatureGates for StaticFeatureGates {
    fn is_enabled(&self, gate: &str) -> bool {
        self.enabled.contains(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gates() {
        let gates = StaticFeatureGates::new();
        assert!(!gates.is_enabled(POLICY_ALPHA_OPTIONS_GATE));
        assert!(!gates.is_enabled(POLICY_BETA_OPTIONS_GATE));
    }

    #[test]
    fn test_enable() {
        let mut gates = StaticFeatureGates::new();
        gates.enable(POLICY_BETA_OPTIONS_GATE);

        assert!(gates.is_enabled(POLICY_BETA_OPTIONS_GATE));
        assert!(!gates.is_enabled(POLICY_ALPHA_OPTIONS_GATE));
    }

    #[test]
    fn test_with_enabled() {
        let gates =
            StaticFeatureGates::with_enabled([POLICY_ALPHA_OPTIONS_GATE, POLICY_BETA_OPTIONS_GATE]);
        assert!(gates.is_enabled(POLICY_ALPHA_OPTIONS_GATE));
        assert!(gates.is_enabled(POLICY_BETA_OPTIONS_GATE));
    }
}
