//! LeadFlow Store - seed data for the in-memory workspace
//!
//! Provides:
//! - Seed Format v0 (YAML) for buyers, rules, leads and dashboard counters
//! - Parser with referential and mapping validation
//! - Digest canonicalization
//! - Loading a parsed seed into a `Workspace`
//! - The embedded demo seed

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use seed::{load_workspace, parse_seed_file, parse_seed_str, sample_seed, SeedV0};
