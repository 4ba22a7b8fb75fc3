//! Route command
//!
//! Usage: leadflow route [--all] [--lead <ID>] [--source ..] [--city ..] [--budget ..] [--status ..]

use clap::Args;
use leadflow_core::render::render_decision;
use leadflow_core::route;
use leadflow_core::rules_engine::route_lead;
use serde::Serialize;

use super::{print_json, CmdResult, Context, InputArgs};

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Route every stored lead and print one outcome per lead
    #[arg(long, conflicts_with = "lead")]
    pub all: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Serialize)]
struct LeadOutcome<'a> {
    lead_id: &'a str,
    #[serde(flatten)]
    outcome: leadflow_core::RoutingOutcome,
}

/// Execute route command
pub fn execute(ctx: &Context, args: RouteArgs) -> CmdResult {
    let rules = ctx.workspace.list_rules();

    if args.all {
        let outcomes: Vec<LeadOutcome> = ctx
            .workspace
            .list_leads()
            .iter()
            .map(|lead| LeadOutcome {
                lead_id: &lead.id,
                outcome: route_lead(rules, lead).outcome,
            })
            .collect();

        if ctx.json {
            return print_json(&outcomes);
        }
        for row in &outcomes {
            let action = row
                .outcome
                .action()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "none".to_string());
            println!(
                "{:<10} {:<9} {:<6} {}",
                row.lead_id,
                row.outcome.kind(),
                row.outcome.rule_id().unwrap_or("-"),
                action
            );
        }
        return Ok(());
    }

    let input = args.input.to_input(&ctx.workspace)?;
    let decision = route(rules, &input);
    if ctx.json {
        return print_json(&decision);
    }
    print!("{}", render_decision(&decision));
    Ok(())
}
