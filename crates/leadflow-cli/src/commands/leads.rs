//! Leads command
//!
//! Usage: leadflow leads <list|show|sources>

use clap::{Args, Subcommand};
use leadflow_core::ops::lead_query::distinct_sources;
use leadflow_core::ops::{filter_leads, LeadQuery, SortKey};
use leadflow_core::LeadStatus;

use super::{print_json, CmdResult, Context};

#[derive(Debug, Args)]
pub struct LeadsArgs {
    #[command(subcommand)]
    pub command: LeadsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LeadsCommand {
    /// List leads
    List(ListArgs),
    /// Show one lead with its delivery attempts
    Show { lead_id: String },
    /// Distinct lead sources, for use with `list --source`
    Sources,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Matches id, name, phone or email
    #[arg(long, default_value = "")]
    pub q: String,

    #[arg(long)]
    pub status: Option<LeadStatus>,

    /// Exact source name
    #[arg(long)]
    pub source: Option<String>,

    /// newest, oldest, name_asc or name_desc
    #[arg(long, default_value = "newest")]
    pub sort: SortKey,
}

/// Execute leads command
pub fn execute(ctx: &Context, args: LeadsArgs) -> CmdResult {
    match args.command {
        LeadsCommand::List(list_args) => execute_list(ctx, list_args),
        LeadsCommand::Show { lead_id } => {
            let lead = ctx.workspace.get_lead(&lead_id)?;
            print_json(lead)
        }
        LeadsCommand::Sources => {
            let sources = distinct_sources(ctx.workspace.list_leads());
            if ctx.json {
                return print_json(&sources);
            }
            for source in sources {
                println!("{}", source);
            }
            Ok(())
        }
    }
}

fn execute_list(ctx: &Context, args: ListArgs) -> CmdResult {
    let query = LeadQuery {
        q: args.q,
        status: args.status,
        source: args.source,
        sort: args.sort,
    };
    let rows = filter_leads(ctx.workspace.list_leads(), &query);

    if ctx.json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No leads match the current filters.");
        return Ok(());
    }

    for lead in rows {
        println!(
            "{:<10} {:<18} {:<17} {:<14} {:<10} {}",
            lead.id,
            lead.name,
            lead.phone,
            lead.source,
            lead.status.as_str(),
            lead.buyer.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
