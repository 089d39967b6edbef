//! In-memory distance source for tests
//!
//! Lets callers seed canned distance rows and canned failures per node, so
//! every topology-construction error path can be exercised without real
//! hardware. Public (not test-only) so downstream resource managers can use
//! it in their own test suites.

use crate::error::{NumafitError, Result};
use crate::topology::sysfs::DistanceSource;
use std::collections::HashMap;

/// Distance source backed by seeded rows instead of sysfs
#[derive(Debug, Default)]
pub struct FakeDistanceSource {
    rows: HashMap<usize, String>,
    io_errors: HashMap<usize, std::io::ErrorKind>,
}

impl FakeDistanceSource {
    /// Create a source with no seeded rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw distance line returned for `node`
    pub fn set_distances(&mut self, node: usize, distances: impl Into<String>) {
        self.rows.insert(node, distances.into());
        self.io_errors.remove(&node);
    }

    /// Make reads for `node` fail with an I/O error of the given kind
    pub fn set_io_error(&mut self, node: usize, kind: std::io::ErrorKind) {
        self.io_errors.insert(node, kind);
    }
}

impl DistanceSource for FakeDistanceSource {
    fn distances(&self, node: usize) -> Result<String> {
        if let Some(kind) = self.io_errors.get(&node) {
            return Err(NumafitError::fetch(node, std::io::Error::from(*kind)));
        }

        match self.rows.get(&node) {
            Some(row) => Ok(row.clone()),
            None => Err(NumafitError::DistanceNotFound { node }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rows() {
        let mut fake = FakeDistanceSource::new();
        fake.set_distances(0, "10 21");
        fake.set_distances(1, "21 10");

        assert_eq!(fake.distances(0).unwrap(), "10 21");
        assert_eq!(fake.distances(1).unwrap(), "21 10");
    }

    #[test]
    fn test_unseeded_node_is_not_found() {
        let fake = FakeDistanceSource::new();
        match fake.distances(7) {
            Err(NumafitError::DistanceNotFound { node: 7 }) => {}
            other => panic!("expected DistanceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_injected_io_error() {
        let mut fake = FakeDistanceSource::new();
        fake.set_distances(0, "10");
        fake.set_io_error(0, std::io::ErrorKind::PermissionDenied);

        match fake.distances(0) {
            Err(NumafitError::DistanceFetch { node: 0, source }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected DistanceFetch, got {:?}", other),
        }
    }
}
