//! The embedded demo seed

use leadflow_core::Workspace;

use crate::errors::Result;
use crate::seed::format_v0::SeedV0;
use crate::seed::loader::load_workspace;
use crate::seed::parser::parse_seed_str;

/// Demo data: three buyers, three rules, four recent leads, dashboard
/// counters and a week of lead volume
pub const SAMPLE_SEED_YAML: &str = include_str!("../../seeds/sample.yaml");

/// Parse the embedded demo seed
///
/// # Errors
///
/// Only if the embedded file is invalid, which the tests rule out.
pub fn sample_seed() -> Result<SeedV0> {
    parse_seed_str(SAMPLE_SEED_YAML)
}

/// The demo seed loaded into a workspace
///
/// # Errors
///
/// See `sample_seed` and `load_workspace`.
pub fn sample_workspace() -> Result<Workspace> {
    load_workspace(&sample_seed()?)
}
