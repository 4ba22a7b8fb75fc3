//! Seed import system
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Loading into a `Workspace`
//! - The embedded demo seed

pub mod digest;
pub mod format_v0;
pub mod loader;
pub mod parser;
pub mod sample;

pub use digest::compute_seed_digest;
pub use format_v0::SeedV0;
pub use loader::load_workspace;
pub use parser::{parse_seed_file, parse_seed_str};
pub use sample::{sample_seed, sample_workspace, SAMPLE_SEED_YAML};
