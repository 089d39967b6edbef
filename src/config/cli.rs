//! CLI arguments for the numafit inspection tool
//!
//! Defines the command-line surface used to inspect a machine's NUMA
//! topology, score candidate node subsets, and dry-run policy-option
//! validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::topology::SYSFS_NODE_ROOT;

/// numafit - NUMA affinity scoring and policy-option validation
#[derive(Parser, Debug, Clone)]
#[command(name = "numafit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect NUMA topology and validate placement policy options")]
#[command(long_about = r#"
numafit models a machine's NUMA distance matrix and scores candidate node
subsets the way a resource manager's placement tie-break does: the subset
with the smallest average inter-node distance wins.

Examples:
  numafit topology                       # Show the machine's NUMA topology
  numafit topology --json                # Same, as JSON
  numafit score --nodes 0,2              # Average distance for nodes {0,2}
  numafit options -o prefer-closest-numa=true --enable-alpha
"#)]
pub struct CliArgs {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the NUMA topology read from sysfs
    #[command(name = "topology")]
    Topology {
        /// Sysfs node directory to read from
        #[arg(long, value_name = "PATH", default_value = SYSFS_NODE_ROOT)]
        sysfs_root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a candidate node subset by average distance
    #[command(name = "score")]
    Score {
        /// Comma-separated NUMA node ids (e.g. 0,2,3)
        #[arg(long, value_name = "IDS", value_delimiter = ',', required = true)]
        nodes: Vec<usize>,

        /// Sysfs node directory to read from
        #[arg(long, value_name = "PATH", default_value = SYSFS_NODE_ROOT)]
        sysfs_root: PathBuf,
    },

    /// Validate policy options against the registry and feature gates
    #[command(name = "options")]
    Options {
        /// Policy option as NAME=VALUE (repeatable)
        #[arg(short = 'o', long = "option", value_name = "NAME=VALUE", value_parser = parse_key_val)]
        options: Vec<(String, String)>,

        /// Enable the alpha-maturity options gate
        #[arg(long)]
        enable_alpha: bool,

        /// Enable the beta-maturity options gate
        #[arg(long)]
        enable_beta: bool,

        /// Output the accepted configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a NAME=VALUE option pair
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("prefer-closest-numa=true").unwrap(),
            ("prefer-closest-numa".to_string(), "true".to_string())
        );
        // Values may contain '='
        assert_eq!(
            parse_key_val("k=a=b").unwrap(),
            ("k".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("no-equals").is_err());
        assert!(parse_key_val("=value").is_err());
    }

    #[test]
    fn test_cli_parses_score_nodes() {
        let args = CliArgs::try_parse_from(["numafit", "score", "--nodes", "0,2,3"]).unwrap();
        match args.command {
            Commands::Score { nodes, .. } => assert_eq!(nodes, vec![0, 2, 3]),
            other => panic!("expected score command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_options() {
        let args = CliArgs::try_parse_from([
            "numafit",
            "options",
            "-o",
            "prefer-closest-numa=true",
            "--enable-alpha",
        ])
        .unwrap();
        match args.command {
            Commands::Options {
                options,
                enable_alpha,
                enable_beta,
                ..
            } => {
                assert_eq!(options.len(), 1);
                assert!(enable_alpha);
                assert!(!enable_beta);
            }
            other => panic!("expected options command, got {:?}", other),
        }
    }
}
