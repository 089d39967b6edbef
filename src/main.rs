//! numafit CLI - NUMA topology inspection and policy-option validation
//!
//! Reads the machine's NUMA distance matrix from sysfs, scores candidate
//! node subsets the way the placement tie-break does, and dry-runs policy
//! option maps against the maturity-gated registry.

use clap::Parser;
use numafit::config::{CliArgs, Commands};
use numafit::error::Result;
use numafit::policy::{
    OptionRegistry, PolicyOptions, StaticFeatureGates, POLICY_ALPHA_OPTIONS_GATE,
    POLICY_BETA_OPTIONS_GATE,
};
use numafit::topology::{NodeMask, NumaTopology};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Commands::Topology { sysfs_root, json } => {
            let topology = NumaTopology::from_sysfs(&sysfs_root)?;
            if json {
                println!("{}", to_json(&topology.summary()));
            } else {
                topology.print_summary();
            }
        }

        Commands::Score { nodes, sysfs_root } => {
            let topology = NumaTopology::from_sysfs(&sysfs_root)?;
            let mask = build_mask(&topology, &nodes);

            let score = topology.average_distance(mask);
            println!("nodes: {:?}", mask.bits());
            println!("average distance: {}", score);
        }

        Commands::Options {
            options,
            enable_alpha,
            enable_beta,
            json,
        } => {
            let mut gates = StaticFeatureGates::new();
            if enable_alpha {
                gates.enable(POLICY_ALPHA_OPTIONS_GATE);
            }
            if enable_beta {
                gates.enable(POLICY_BETA_OPTIONS_GATE);
            }

            let raw: HashMap<String, String> = options.into_iter().collect();
            let registry = OptionRegistry::default();
            let parsed = PolicyOptions::new(&raw, &registry, &gates)?;

            if json {
                println!("{}", to_json(&parsed));
            } else {
                println!("Accepted policy options:");
                println!("  prefer-closest-numa: {}", parsed.prefer_closest_numa);
                println!(
                    "  max-allowable-numa-nodes: {}",
                    parsed.max_allowable_numa_nodes
                );
            }
        }
    }

    Ok(())
}

/// Build the candidate mask, rejecting ids the topology does not have
fn build_mask(topology: &NumaTopology, nodes: &[usize]) -> NodeMask {
    if nodes.is_empty() {
        eprintln!("Error: --nodes must name at least one NUMA node");
        std::process::exit(2);
    }

    for &node in nodes {
        if !topology.nodes().contains(&node) {
            eprintln!(
                "Error: NUMA node {} is not in this topology (nodes: {:?})",
                node,
                topology.nodes()
            );
            std::process::exit(2);
        }
    }

    match NodeMask::new(nodes) {
        Some(mask) => mask,
        None => {
            eprintln!("Error: NUMA node ids above 63 are not supported");
            std::process::exit(2);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}
