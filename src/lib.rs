//! # numafit - NUMA affinity scoring for resource managers
//!
//! numafit is the node-local NUMA-affinity subsystem of a resource manager
//! that assigns CPU and device resources to workloads on multi-socket
//! machines. It models the machine's inter-node distance matrix once at
//! startup and answers two questions for the placement algorithm:
//!
//! - How physically close are the nodes in a candidate subset? (the
//!   tie-break between equally preferred placements)
//! - Which named tuning options may the operator enable for the active
//!   policy, given each option's maturity stage?
//!
//! ## Scoring a candidate subset
//!
//! ```
//! use numafit::topology::{FakeDistanceSource, NodeMask, NumaTopology};
//!
//! let mut sysfs = FakeDistanceSource::new();
//! sysfs.set_distances(0, "10 21");
//! sysfs.set_distances(1, "21 10");
//!
//! let topology = NumaTopology::new(&[0, 1], &sysfs)?;
//! let candidate = NodeMask::new(&[0, 1]).unwrap();
//!
//! // Mean over every ordered pair, self-pairs included: (10+21+21+10)/4
//! assert_eq!(topology.average_distance(candidate), 15.5);
//! # Ok::<(), numafit::NumafitError>(())
//! ```
//!
//! On a real machine, build from sysfs instead:
//!
//! ```no_run
//! use numafit::topology::NumaTopology;
//!
//! let topology = NumaTopology::detect()?;
//! topology.print_summary();
//! # Ok::<(), numafit::NumafitError>(())
//! ```
//!
//! ## Validating policy options
//!
//! ```
//! use numafit::policy::{
//!     OptionRegistry, PolicyOptions, StaticFeatureGates,
//!     POLICY_ALPHA_OPTIONS_GATE, PREFER_CLOSEST_NUMA,
//! };
//! use std::collections::HashMap;
//!
//! let registry = OptionRegistry::default();
//! let gates = StaticFeatureGates::with_enabled([POLICY_ALPHA_OPTIONS_GATE]);
//!
//! let mut raw = HashMap::new();
//! raw.insert(PREFER_CLOSEST_NUMA.to_string(), "true".to_string());
//!
//! let options = PolicyOptions::new(&raw, &registry, &gates)?;
//! assert!(options.prefer_closest_numa);
//! # Ok::<(), numafit::NumafitError>(())
//! ```
//!
//! Without the alpha gate the same map is rejected with an error naming the
//! required gate; the caller gets no partial configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod policy;
pub mod topology;

// Re-export commonly used types
pub use error::{NumafitError, Result};
pub use policy::{FeatureGates, OptionRegistry, PolicyOptions};
pub use topology::{DistanceSource, NodeMask, NumaTopology};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
