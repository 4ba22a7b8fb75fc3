//! Seed command
//!
//! Usage: leadflow seed <validate|digest|sample>

use clap::{Args, Subcommand};
use leadflow_store::seed::{compute_seed_digest, SAMPLE_SEED_YAML};
use std::path::PathBuf;

use super::CmdResult;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Parse and validate a seed file
    Validate {
        /// Path to seed YAML file
        path: PathBuf,
    },
    /// Print the canonical digest of a seed file
    Digest {
        /// Path to seed YAML file
        path: PathBuf,
    },
    /// Print the built-in demo seed
    Sample,
}

/// Execute seed command
pub fn execute(args: SeedArgs, json: bool) -> CmdResult {
    match args.command {
        SeedCommand::Validate { path } => {
            let seed = leadflow_store::parse_seed_file(&path)?;
            let digest = compute_seed_digest(&seed)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": true,
                        "buyers": seed.buyers.len(),
                        "rules": seed.rules.len(),
                        "leads": seed.leads.len(),
                        "digest": digest,
                    })
                );
            } else {
                println!(
                    "✓ {} is valid ({} buyers, {} rules, {} leads)",
                    path.display(),
                    seed.buyers.len(),
                    seed.rules.len(),
                    seed.leads.len()
                );
            }
            Ok(())
        }
        SeedCommand::Digest { path } => {
            let seed = leadflow_store::parse_seed_file(&path)?;
            println!("{}", compute_seed_digest(&seed)?);
            Ok(())
        }
        SeedCommand::Sample => {
            print!("{}", SAMPLE_SEED_YAML);
            Ok(())
        }
    }
}
