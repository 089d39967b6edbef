//! Policy-option registry
//!
//! Maps option names to their maturity classification and decides, against
//! the host's feature gates, whether an option may be accepted from operator
//! configuration. The registry is built once at process start and read-only
//! afterwards.

use crate::error::{NumafitError, Result};
use crate::policy::gates::{FeatureGates, POLICY_ALPHA_OPTIONS_GATE, POLICY_BETA_OPTIONS_GATE};
use crate::policy::options::{MAX_ALLOWABLE_NUMA_NODES, PREFER_CLOSEST_NUMA};
use serde::Serialize;
use std::collections::HashMap;

/// Maturity stage of a policy option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionMaturity {
    /// Accepted unconditionally
    Stable,
    /// Accepted only while the beta-options gate is enabled
    Beta,
    /// Accepted only while the alpha-options gate is enabled
    Alpha,
}

impl OptionMaturity {
    /// The gate an option of this maturity requires, if any
    pub fn required_gate(&self) -> Option<&'static str> {
        match self {
            Self::Stable => None,
            Self::Beta => Some(POLICY_BETA_OPTIONS_GATE),
            Self::Alpha => Some(POLICY_ALPHA_OPTIONS_GATE),
        }
    }
}

/// Immutable table of known policy options and their maturity
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    options: HashMap<String, OptionMaturity>,
}

impl OptionRegistry {
    /// Create a registry with no registered options
    pub fn empty() -> Self {
        Self {
            options: HashMap::new(),
        }
    }

    /// Register an option at a maturity stage
    ///
    /// Registration happens during registry construction, before the table
    /// is handed out; re-registering a name overwrites its maturity.
    pub fn register(&mut self, name: impl Into<String>, maturity: OptionMaturity) {
        self.options.insert(name.into(), maturity);
    }

    /// Look up an option's maturity
    pub fn maturity(&self, name: &str) -> Option<OptionMaturity> {
        self.options.get(name).copied()
    }

    /// Check whether an option would be accepted right now
    ///
    /// Applies the same rules as full option parsing, without needing a
    /// value: unknown names are rejected, and beta/alpha options require
    /// their gate. Only options explicitly registered as stable bypass
    /// gating.
    pub fn check_available(&self, name: &str, gates: &dyn FeatureGates) -> Result<()> {
        let maturity = self
            .maturity(name)
            .ok_or_else(|| NumafitError::UnknownOption(name.to_string()))?;

        match maturity.required_gate() {
            None => Ok(()),
            Some(gate) if gates.is_enabled(gate) => Ok(()),
            Some(gate) => Err(NumafitError::not_enabled(name, gate)),
        }
    }
}

impl Default for OptionRegistry {
    /// Registry seeded with the options the policy engine understands
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(PREFER_CLOSEST_NUMA, OptionMaturity::Alpha);
        registry.register(MAX_ALLOWABLE_NUMA_NODES, OptionMaturity::Beta);
        registry
    }
}
