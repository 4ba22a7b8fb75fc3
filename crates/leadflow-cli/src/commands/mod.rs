//! Subcommand implementations
//!
//! Every command other than `seed` runs against a `Context`: the workspace
//! loaded from a seed plus the role the caller acts as.

pub mod buyers;
pub mod leads;
pub mod route;
pub mod rules;
pub mod seed;
pub mod stats;

use clap::Args;
use leadflow_core::{Role, RuleInput, Workspace};
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// Environment variable holding the default role
pub const ROLE_ENV: &str = "LEADFLOW_ROLE";

pub type CmdResult = Result<(), Box<dyn Error>>;

pub struct Context {
    pub workspace: Workspace,
    pub role: Role,
    pub json: bool,
}

impl Context {
    /// Load the workspace and resolve the role
    ///
    /// An explicit `--role` must be a valid role name. The environment
    /// fallback is lenient: an unknown value means admin.
    pub fn load(seed: Option<&Path>, role: Option<Role>, json: bool) -> Result<Self, Box<dyn Error>> {
        let parsed = match seed {
            Some(path) => leadflow_store::parse_seed_file(path)?,
            None => leadflow_store::sample_seed()?,
        };
        let workspace = leadflow_store::load_workspace(&parsed)?;

        let role = role.unwrap_or_else(|| {
            std::env::var(ROLE_ENV)
                .map(|v| Role::from_cookie_value(&v))
                .unwrap_or_default()
        });
        tracing::debug!(role = %role, "context loaded");

        Ok(Self {
            workspace,
            role,
            json,
        })
    }
}

/// Lead attributes for evaluation: a stored lead and/or explicit overrides,
/// on top of the editor's sample input
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Start from a stored lead instead of the sample input
    #[arg(long)]
    pub lead: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, conflicts_with = "no_budget")]
    pub budget: Option<f64>,

    /// Evaluate as if the lead had no budget
    #[arg(long)]
    pub no_budget: bool,

    #[arg(long)]
    pub status: Option<String>,
}

impl InputArgs {
    pub fn to_input(&self, ws: &Workspace) -> Result<RuleInput, Box<dyn Error>> {
        let mut input = match &self.lead {
            Some(id) => RuleInput::from_lead(ws.get_lead(id)?),
            None => RuleInput::sample(),
        };
        if let Some(source) = &self.source {
            input.source = source.clone();
        }
        if let Some(city) = &self.city {
            input.city = city.clone();
        }
        if self.budget.is_some() {
            input.budget = self.budget;
        }
        if self.no_budget {
            input.budget = None;
        }
        if let Some(status) = &self.status {
            input.status = status.clone();
        }
        Ok(input)
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
