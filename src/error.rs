//! Error types for numafit
//!
//! This module defines all error types used throughout the crate. Every
//! failure is a distinct variant carrying its context (node id, option name,
//! offending token), so callers classify errors by matching on the variant
//! rather than comparing message strings.

use thiserror::Error;

/// Main error type for numafit operations
#[derive(Error, Debug)]
pub enum NumafitError {
    /// No distance record exists for the node
    #[error("no distance data for NUMA node {node}")]
    DistanceNotFound { node: usize },

    /// Underlying source failed while reading a distance row
    #[error("failed to read distances for NUMA node {node}: {source}")]
    DistanceFetch {
        node: usize,
        #[source]
        source: std::io::Error,
    },

    /// A distance row token is not a valid non-negative integer
    #[error("cannot parse distance '{token}' for NUMA node {node}")]
    DistanceParse { node: usize, token: String },

    /// A distance row has fewer entries than the machine has nodes
    #[error("distance row for NUMA node {node} has {actual} entries, expected at least {expected}")]
    DistanceRowTooShort {
        node: usize,
        expected: usize,
        actual: usize,
    },

    /// Operator supplied an option name not present in the registry
    #[error("unknown policy option: {0}")]
    UnknownOption(String),

    /// Option recognized but its maturity gate is not enabled
    #[error("policy option '{option}' requires feature gate '{gate}'")]
    OptionNotEnabled { option: String, gate: String },

    /// Option value failed to parse into the option's expected type
    #[error("bad value '{value}' for policy option '{option}'")]
    BadOptionValue { option: String, value: String },
}

impl NumafitError {
    /// Create a fetch error with node context
    pub fn fetch(node: usize, source: std::io::Error) -> Self {
        Self::DistanceFetch { node, source }
    }

    /// Create a parse error for an offending row token
    pub fn parse(node: usize, token: impl Into<String>) -> Self {
        Self::DistanceParse {
            node,
            token: token.into(),
        }
    }

    /// Create a gating error naming the required gate
    pub fn not_enabled(option: impl Into<String>, gate: impl Into<String>) -> Self {
        Self::OptionNotEnabled {
            option: option.into(),
            gate: gate.into(),
        }
    }

    /// Create a value error for an option that failed typed parsing
    pub fn bad_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::BadOptionValue {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Get the NUMA node associated with this error, if any
    pub fn node(&self) -> Option<usize> {
        match self {
            Self::DistanceNotFound { node }
            | Self::DistanceFetch { node, .. }
            | Self::DistanceParse { node, .. }
            | Self::DistanceRowTooShort { node, .. } => Some(*node),
            _ => None,
        }
    }

    /// Get the policy option associated with this error, if any
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Self::UnknownOption(name) => Some(name),
            Self::OptionNotEnabled { option, .. } | Self::BadOptionValue { option, .. } => {
                Some(option)
            }
            _ => None,
        }
    }

    /// Check if this error is fatal to topology construction
    pub fn is_topology_error(&self) -> bool {
        matches!(
            self,
            Self::DistanceNotFound { .. }
                | Self::DistanceFetch { .. }
                | Self::DistanceParse { .. }
                | Self::DistanceRowTooShort { .. }
        )
    }
}

/// Result type alias for numafit operations
pub type Result<T> = std::result::Result<T, NumafitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumafitError::parse(2, "abc");
        assert_eq!(err.to_string(), "cannot parse distance 'abc' for NUMA node 2");

        let err = NumafitError::not_enabled("prefer-closest-numa", "PolicyAlphaOptions");
        assert!(err.to_string().contains("PolicyAlphaOptions"));
    }

    #[test]
    fn test_error_context_accessors() {
        assert_eq!(NumafitError::DistanceNotFound { node: 3 }.node(), Some(3));
        assert_eq!(
            NumafitError::UnknownOption("nope".into()).option_name(),
            Some("nope")
        );
        assert_eq!(NumafitError::UnknownOption("nope".into()).node(), None);
    }

    #[test]
    fn test_topology_error_classification() {
        assert!(NumafitError::DistanceNotFound { node: 0 }.is_topology_error());
        assert!(!NumafitError::UnknownOption("x".into()).is_topology_error());
    }
}
