//! Buyers command
//!
//! Usage: leadflow buyers <list|preview|enable|disable|set-cap|map>

use clap::{Args, Subcommand};
use leadflow_core::model::FieldMapRow;
use leadflow_core::ops::buyer_ops::{preview_payload, sample_lead, search_buyers};
use leadflow_core::ops::cap_state;
use leadflow_core::{apply, Command};

use super::{print_json, CmdResult, Context};

#[derive(Debug, Args)]
pub struct BuyersArgs {
    #[command(subcommand)]
    pub command: BuyersCommand,
}

#[derive(Debug, Subcommand)]
pub enum BuyersCommand {
    /// List buyers with their cap state
    List {
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        q: String,
    },
    /// Show the payload a buyer would receive
    Preview {
        buyer_id: String,

        /// Use a stored lead instead of the synthetic test lead
        #[arg(long)]
        lead: Option<String>,
    },
    /// Activate a buyer
    Enable { buyer_id: String },
    /// Deactivate a buyer
    Disable { buyer_id: String },
    /// Set the daily delivery cap (0 = no cap)
    SetCap { buyer_id: String, daily_cap: u32 },
    /// Replace a buyer's field mapping
    Map {
        buyer_id: String,

        /// Mapping rows as internal=buyer_field, in order
        #[arg(long = "row", value_parser = parse_row)]
        rows: Vec<FieldMapRow>,
    },
}

fn parse_row(s: &str) -> Result<FieldMapRow, String> {
    s.split_once('=')
        .map(|(from, to)| FieldMapRow::new(from.trim(), to.trim()))
        .ok_or_else(|| format!("expected internal=buyer_field, got {:?}", s))
}

/// Execute buyers command
pub fn execute(ctx: &mut Context, args: BuyersArgs) -> CmdResult {
    match args.command {
        BuyersCommand::List { q } => execute_list(ctx, &q),
        BuyersCommand::Preview { buyer_id, lead } => execute_preview(ctx, &buyer_id, lead),
        BuyersCommand::Enable { buyer_id } => {
            let cmd = Command::BuyerSetActive {
                buyer_id: buyer_id.clone(),
                active: true,
            };
            execute_mutation(ctx, &buyer_id, cmd)
        }
        BuyersCommand::Disable { buyer_id } => {
            let cmd = Command::BuyerSetActive {
                buyer_id: buyer_id.clone(),
                active: false,
            };
            execute_mutation(ctx, &buyer_id, cmd)
        }
        BuyersCommand::SetCap {
            buyer_id,
            daily_cap,
        } => {
            let cmd = Command::BuyerSetDailyCap {
                buyer_id: buyer_id.clone(),
                daily_cap,
            };
            execute_mutation(ctx, &buyer_id, cmd)
        }
        BuyersCommand::Map { buyer_id, rows } => {
            let cmd = Command::BuyerSaveMapping {
                buyer_id: buyer_id.clone(),
                mapping: rows,
            };
            execute_mutation(ctx, &buyer_id, cmd)
        }
    }
}

fn execute_list(ctx: &Context, q: &str) -> CmdResult {
    let buyers = search_buyers(&ctx.workspace, q);
    if ctx.json {
        return print_json(&buyers);
    }

    for buyer in buyers {
        let state = if buyer.active { "active" } else { "paused" };
        let cap = if buyer.daily_cap == 0 {
            "-".to_string()
        } else {
            buyer.daily_cap.to_string()
        };
        println!(
            "{:<4} {:<20} {:<7} {:>5}/{:<5} {:<11} {}",
            buyer.id,
            buyer.name,
            state,
            buyer.sent_today,
            cap,
            cap_state(buyer.sent_today, buyer.daily_cap).label(),
            buyer.auth_type.as_str()
        );
    }
    Ok(())
}

fn execute_preview(ctx: &Context, buyer_id: &str, lead_id: Option<String>) -> CmdResult {
    let buyer = ctx.workspace.get_buyer(buyer_id)?;
    let lead = match lead_id {
        Some(id) => ctx.workspace.get_lead(&id)?.clone(),
        None => sample_lead(),
    };

    print_json(&preview_payload(&buyer.mapping, &lead))
}

/// Apply a command and print the changed buyer
fn execute_mutation(ctx: &mut Context, buyer_id: &str, cmd: Command) -> CmdResult {
    let workspace = std::mem::take(&mut ctx.workspace);
    let (workspace, _) = apply(workspace, cmd, &ctx.role)?;
    ctx.workspace = workspace;

    eprintln!("✓ Updated {}", buyer_id);
    print_json(ctx.workspace.get_buyer(buyer_id)?)
}
