//! Sysfs-backed NUMA distance source
//!
//! Reads per-node distance rows from the kernel's NUMA topology directory
//! (`/sys/devices/system/node/node<N>/distance`). The directory root is
//! configurable so tests and hosts with a mounted sysfs snapshot can point
//! elsewhere.

use crate::error::{NumafitError, Result};
use std::path::{Path, PathBuf};

/// Default sysfs directory describing NUMA nodes on Linux
pub const SYSFS_NODE_ROOT: &str = "/sys/devices/system/node";

/// Abstract per-node distance provider
///
/// Implementations return the raw distance line for one node: whitespace-
/// separated non-negative decimal integers, one per NUMA node in ascending
/// node-id order.
pub trait DistanceSource {
    /// Fetch the raw distance row for `node`
    fn distances(&self, node: usize) -> Result<String>;
}

/// Distance source reading from a sysfs-style directory tree
#[derive(Debug, Clone)]
pub struct SysfsDistanceSource {
    root: PathBuf,
}

impl SysfsDistanceSource {
    /// Create a source rooted at a custom directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to a node's distance file
    fn distance_path(&self, node: usize) -> PathBuf {
        self.root.join(format!("node{}", node)).join("distance")
    }
}

impl Default for SysfsDistanceSource {
    fn default() -> Self {
        Self::new(SYSFS_NODE_ROOT)
    }
}

impl DistanceSource for SysfsDistanceSource {
    fn distances(&self, node: usize) -> Result<String> {
        let path = self.distance_path(node);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(raw.trim().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(NumafitError::DistanceNotFound { node })
            }
            Err(e) => Err(NumafitError::fetch(node, e)),
        }
    }
}

/// Parse a raw distance line into a row of distance costs
///
/// `node` is carried for error context only.
pub fn parse_distance_line(node: usize, raw: &str) -> Result<Vec<u64>> {
    let mut row = Vec::new();
    for token in raw.split_whitespace() {
        let distance = token
            .parse::<u64>()
            .map_err(|_| NumafitError::parse(node, token))?;
        row.push(distance);
    }
    Ok(row)
}

/// Enumerate NUMA node ids from a sysfs-style directory tree
///
/// Returns ids in ascending order. A machine exposing no `node<N>` entries
/// (or no directory at all) is treated as a single-node system.
pub fn discover_nodes(root: impl AsRef<Path>) -> Vec<usize> {
    let mut nodes = Vec::new();

    if let Ok(entries) = std::fs::read_dir(root.as_ref()) {
        for entry in entries.filter_map(|e| e.ok()) {
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(suffix) = name_str.strip_prefix("node") {
                if let Ok(node_id) = suffix.parse::<usize>() {
                    nodes.push(node_id);
                }
            }
        }
    }

    nodes.sort_unstable();

    // Fallback for non-NUMA machines
    if nodes.is_empty() {
        tracing::debug!("no NUMA node entries found, assuming single node");
        nodes.push(0);
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seed_node(root: &Path, node: usize, distances: &str) {
        let dir = root.join(format!("node{}", node));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("distance"), distances).unwrap();
    }

    #[test]
    fn test_reads_distance_file() {
        let root = TempDir::new().unwrap();
        seed_node(root.path(), 0, "10 11 12 13\n");

        let sysfs = SysfsDistanceSource::new(root.path());
        assert_eq!(sysfs.distances(0).unwrap(), "10 11 12 13");
    }

    #[test]
    fn test_missing_node_is_not_found() {
        let root = TempDir::new().unwrap();
        seed_node(root.path(), 0, "10");

        let sysfs = SysfsDistanceSource::new(root.path());
        match sysfs.distances(99) {
            Err(NumafitError::DistanceNotFound { node: 99 }) => {}
            other => panic!("expected DistanceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_distance_line() {
        assert_eq!(parse_distance_line(0, "10 11 12").unwrap(), vec![10, 11, 12]);
        assert_eq!(parse_distance_line(0, "  10\t20 ").unwrap(), vec![10, 20]);
        assert_eq!(parse_distance_line(0, "").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        match parse_distance_line(1, "10 x 12") {
            Err(NumafitError::DistanceParse { node: 1, token }) => assert_eq!(token, "x"),
            other => panic!("expected DistanceParse, got {:?}", other),
        }

        // Negative values are not valid distances
        assert!(parse_distance_line(0, "10 -1").is_err());
    }

    #[test]
    fn test_discover_nodes_sorted() {
        let root = TempDir::new().unwrap();
        seed_node(root.path(), 2, "12 12 10");
        seed_node(root.path(), 0, "10 11 12");
        seed_node(root.path(), 1, "11 10 12");
        // Non-node entries are ignored
        fs::create_dir_all(root.path().join("cpu0")).unwrap();
        fs::create_dir_all(root.path().join("nodeX")).unwrap();

        assert_eq!(discover_nodes(root.path()), vec![0, 1, 2]);
    }

    #[test]
    fn test_discover_nodes_fallback() {
        let root = TempDir::new().unwrap();
        assert_eq!(discover_nodes(root.path()), vec![0]);
    }
}
