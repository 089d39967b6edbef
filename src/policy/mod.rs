//! Policy-option validation module
//!
//! Maturity-gated option registry and the typed configuration built from
//! operator input.

mod gates;
mod options;
mod registry;

pub use gates::{
    FeatureGates, StaticFeatureGates, POLICY_ALPHA_OPTIONS_GATE, POLICY_BETA_OPTIONS_GATE,
};
pub use options::{PolicyOptions, MAX_ALLOWABLE_NUMA_NODES, PREFER_CLOSEST_NUMA};
pub use registry::{OptionMaturity, OptionRegistry};
