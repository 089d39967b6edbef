//! NUMA topology model
//!
//! Holds the machine's inter-node distance matrix and scores candidate node
//! subsets by average distance. Built once at startup from a
//! [`DistanceSource`]; immutable afterwards, so it is safe to share across
//! threads scoring different candidates concurrently.

use crate::error::{NumafitError, Result};
use crate::topology::mask::NodeMask;
use crate::topology::sysfs::{
    discover_nodes, parse_distance_line, DistanceSource, SysfsDistanceSource, SYSFS_NODE_ROOT,
};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Immutable NUMA distance model for one machine
///
/// Rows are keyed by node id, not by position, so sparse or non-zero-based
/// node ids are handled. The column holding the distance to node `j` is the
/// rank of `j` among the machine's node ids in ascending order, matching the
/// sysfs distance-line layout.
#[derive(Debug, Clone)]
pub struct NumaTopology {
    /// Node ids in construction order
    nodes: Vec<usize>,
    /// Distance row per node id
    distances: HashMap<usize, Vec<u64>>,
    /// Node id -> column index within each row
    columns: HashMap<usize, usize>,
}

/// Serializable snapshot of a topology, row-per-node in node order
#[derive(Debug, Clone, Serialize)]
pub struct TopologySummary {
    /// Node ids in construction order
    pub nodes: Vec<usize>,
    /// Distance rows, one per node, in the same order as `nodes`
    pub distances: Vec<Vec<u64>>,
}

impl NumaTopology {
    /// Build the model by fetching one distance row per node, in input order
    ///
    /// Any fetch or parse failure aborts construction; there is no partial
    /// topology. A row may carry more entries than the machine has nodes
    /// (some kernels expose columns for possible-but-offline nodes); fewer
    /// is a construction error.
    pub fn new(nodes: &[usize], source: &dyn DistanceSource) -> Result<Self> {
        let mut sorted: Vec<usize> = nodes.to_vec();
        sorted.sort_unstable();
        let columns: HashMap<usize, usize> =
            sorted.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let mut distances = HashMap::with_capacity(nodes.len());
        for &node in nodes {
            let raw = source.distances(node)?;
            let row = parse_distance_line(node, &raw)?;
            if row.len() < nodes.len() {
                return Err(NumafitError::DistanceRowTooShort {
                    node,
                    expected: nodes.len(),
                    actual: row.len(),
                });
            }
            distances.insert(node, row);
        }

        tracing::debug!(nodes = nodes.len(), "built NUMA topology");

        Ok(Self {
            nodes: nodes.to_vec(),
            distances,
            columns,
        })
    }

    /// Build from a sysfs-style directory, discovering the node list first
    pub fn from_sysfs(root: impl AsRef<Path>) -> Result<Self> {
        let nodes = discover_nodes(root.as_ref());
        let source = SysfsDistanceSource::new(root.as_ref());
        Self::new(&nodes, &source)
    }

    /// Build from the running machine's sysfs
    pub fn detect() -> Result<Self> {
        Self::from_sysfs(SYSFS_NODE_ROOT)
    }

    /// Node ids in construction order
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Number of NUMA nodes in the model
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Distance cost from `a` to `b`
    ///
    /// Returns `None` when either node is not part of the topology. The
    /// matrix is used as given: `distance(a, b)` and `distance(b, a)` may
    /// differ on machines reporting asymmetric costs.
    pub fn distance(&self, a: usize, b: usize) -> Option<u64> {
        let row = self.distances.get(&a)?;
        let col = *self.columns.get(&b)?;
        row.get(col).copied()
    }

    /// Average distance over all ordered node pairs in `mask`
    ///
    /// Every ordered pair is counted, including self-pairs, so a subset of
    /// size k divides by k². A singleton's score is its local-access
    /// baseline `distance(n, n)`. Smaller is closer; the hint-generation
    /// tie-break prefers the candidate with the smallest score.
    ///
    /// # Panics
    ///
    /// An empty mask or a mask naming nodes outside the topology is a
    /// caller bug. Debug builds assert; release builds return NaN for an
    /// empty mask and panic on unknown nodes.
    pub fn average_distance(&self, mask: NodeMask) -> f64 {
        debug_assert!(!mask.is_empty(), "candidate node set must be non-empty");

        let bits = mask.bits();
        let mut sum: f64 = 0.0;
        let mut count: f64 = 0.0;
        for &a in &bits {
            let row = &self.distances[&a];
            for &b in &bits {
                sum += row[self.columns[&b]] as f64;
                count += 1.0;
            }
        }

        sum / count
    }

    /// Serializable snapshot, rows in node order
    pub fn summary(&self) -> TopologySummary {
        let distances = self
            .nodes
            .iter()
            .map(|n| self.distances[n].clone())
            .collect();
        TopologySummary {
            nodes: self.nodes.clone(),
            distances,
        }
    }

    /// Print a topology summary to stdout
    pub fn print_summary(&self) {
        println!("NUMA Topology:");
        println!("  Nodes: {}", self.node_count());

        for &node in &self.nodes {
            println!("  Node {}: distances {:?}", node, self.distances[&node]);
        }
    }
}
