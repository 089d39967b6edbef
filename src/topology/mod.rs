//! NUMA topology module
//!
//! Distance-matrix model of the machine's NUMA nodes, the sysfs source it
//! is built from, and the bitmask type used to name candidate node subsets.

pub mod fake;
mod mask;
mod model;
mod sysfs;

pub use fake::FakeDistanceSource;
pub use mask::{NodeMask, MAX_NODE_ID};
pub use model::{NumaTopology, TopologySummary};
pub use sysfs::{
    discover_nodes, parse_distance_line, DistanceSource, SysfsDistanceSource, SYSFS_NODE_ROOT,
};
