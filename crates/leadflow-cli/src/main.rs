//! LeadFlow CLI
//!
//! Command-line interface for the LeadFlow routing kernel

use clap::{Parser, Subcommand};
use leadflow_core::logging_facility::{init, Profile};
use leadflow_core_types::RequestContext;
use std::path::PathBuf;

mod commands;

use commands::Context;
use leadflow_core::Role;

#[derive(Debug, Parser)]
#[command(name = "leadflow")]
#[command(about = "LeadFlow - Lead routing rules, buyers and leads", long_about = None)]
struct Cli {
    /// Seed file to load (default: the built-in demo workspace)
    #[arg(long, global = true, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Role to act as; falls back to $LEADFLOW_ROLE, then admin
    #[arg(long, global = true)]
    role: Option<Role>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Routing rule operations
    Rules(commands::rules::RulesArgs),
    /// Route a lead (or an ad-hoc input) through the rule set
    Route(commands::route::RouteArgs),
    /// Buyer operations
    Buyers(commands::buyers::BuyersArgs),
    /// Lead listing
    Leads(commands::leads::LeadsArgs),
    /// Dashboard counters
    Stats,
    /// Seed file operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let request = RequestContext::new();
    let span = tracing::info_span!("cli", request_id = %request.request_id);
    let _guard = span.enter();

    let Cli {
        seed,
        role,
        json,
        command,
        ..
    } = cli;
    let load = || Context::load(seed.as_deref(), role, json);

    let result = match command {
        Commands::Rules(args) => load().and_then(|mut ctx| commands::rules::execute(&mut ctx, args)),
        Commands::Route(args) => load().and_then(|ctx| commands::route::execute(&ctx, args)),
        Commands::Buyers(args) => {
            load().and_then(|mut ctx| commands::buyers::execute(&mut ctx, args))
        }
        Commands::Leads(args) => load().and_then(|ctx| commands::leads::execute(&ctx, args)),
        Commands::Stats => load().and_then(|ctx| commands::stats::execute(&ctx)),
        Commands::Seed(args) => commands::seed::execute(args, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        tracing::debug!(request_id = %request.request_id, "command failed");
        std::process::exit(1);
    }
}
