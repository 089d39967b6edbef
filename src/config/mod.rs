//! Configuration module for numafit
//!
//! CLI argument definitions for the inspection binary.

mod cli;

pub use cli::*;
