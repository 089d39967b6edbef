//! Typed policy options
//!
//! Validates the operator-supplied option map (name -> raw string value)
//! against the registry and the host's feature gates, and produces the
//! fixed-shape configuration the policy engine consumes.

use crate::error::{NumafitError, Result};
use crate::policy::gates::FeatureGates;
use crate::policy::registry::OptionRegistry;
use serde::Serialize;
use std::collections::HashMap;

/// Enable the closest-NUMA tie-break between equally preferred candidates
pub const PREFER_CLOSEST_NUMA: &str = "prefer-closest-numa";

/// Cap the number of NUMA nodes the placement algorithm will enumerate
pub const MAX_ALLOWABLE_NUMA_NODES: &str = "max-allowable-numa-nodes";

/// Typed policy configuration
///
/// Default is the zero value: no tie-break, no node cap. Fields are only
/// populated from entries that passed registry and gate validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolicyOptions {
    /// Among tied candidates, prefer the subset with the smallest average
    /// NUMA distance
    pub prefer_closest_numa: bool,
    /// Upper bound on NUMA nodes considered per placement (0 = unset)
    pub max_allowable_numa_nodes: usize,
}

impl PolicyOptions {
    /// Validate and parse an operator option map
    ///
    /// Every entry must name a registered option whose maturity gate is
    /// enabled, and carry a value that parses into the option's type. The
    /// first failing entry aborts validation; no partial configuration is
    /// produced.
    pub fn new(
        raw: &HashMap<String, String>,
        registry: &OptionRegistry,
        gates: &dyn FeatureGates,
    ) -> Result<Self> {
        let mut options = Self::default();

        for (name, value) in raw {
            registry.check_available(name, gates)?;

            match name.as_str() {
                PREFER_CLOSEST_NUMA => {
                    options.prefer_closest_numa = parse_bool_option(name, value)?;
                }
                MAX_ALLOWABLE_NUMA_NODES => {
                    options.max_allowable_numa_nodes = parse_node_limit(name, value)?;
                }
                // Registered by the host but not understood by this engine
                _ => return Err(NumafitError::UnknownOption(name.clone())),
            }
        }

        Ok(options)
    }
}

fn parse_bool_option(name: &str, value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| NumafitError::bad_value(name, value))
}

fn parse_node_limit(name: &str, value: &str) -> Result<usize> {
    let limit = value
        .parse::<usize>()
        .map_err(|_| NumafitError::bad_value(name, value))?;
    if limit < 1 {
        return Err(NumafitError::bad_value(name, value));
    }
    Ok(limit)
}
