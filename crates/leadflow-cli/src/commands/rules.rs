//! Rules command
//!
//! Usage: leadflow rules <list|show|eval|create|enable|disable|delete|save>

use clap::{Args, Subcommand};
use leadflow_core::render::{render_evaluation, render_rule};
use leadflow_core::{apply, evaluate_rule, Command, CommandResult, Rule};
use std::path::PathBuf;

use super::{print_json, CmdResult, Context, InputArgs};

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List rules in evaluation order
    List,
    /// Show one rule as IF/THEN/ELSE
    Show { rule_id: String },
    /// Test a rule against the sample input, a stored lead or overrides
    Eval(EvalArgs),
    /// Create a rule with editor defaults
    Create,
    /// Enable a rule
    Enable { rule_id: String },
    /// Disable a rule
    Disable { rule_id: String },
    /// Delete a rule
    Delete { rule_id: String },
    /// Replace a rule with the JSON definition in a file
    Save {
        /// Path to a JSON rule
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Rule ID to test
    pub rule_id: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute rules command
pub fn execute(ctx: &mut Context, args: RulesArgs) -> CmdResult {
    match args.command {
        RulesCommand::List => execute_list(ctx),
        RulesCommand::Show { rule_id } => execute_show(ctx, &rule_id),
        RulesCommand::Eval(eval_args) => execute_eval(ctx, eval_args),
        RulesCommand::Create => execute_mutation(ctx, Command::RuleCreate),
        RulesCommand::Enable { rule_id } => execute_mutation(
            ctx,
            Command::RuleSetEnabled {
                rule_id,
                enabled: true,
            },
        ),
        RulesCommand::Disable { rule_id } => execute_mutation(
            ctx,
            Command::RuleSetEnabled {
                rule_id,
                enabled: false,
            },
        ),
        RulesCommand::Delete { rule_id } => execute_mutation(ctx, Command::RuleDelete { rule_id }),
        RulesCommand::Save { file } => {
            let content = std::fs::read_to_string(&file)?;
            let rule: Rule = serde_json::from_str(&content)?;
            execute_mutation(ctx, Command::RuleSave { rule })
        }
    }
}

fn execute_list(ctx: &Context) -> CmdResult {
    let rules = ctx.workspace.list_rules();
    if ctx.json {
        return print_json(rules);
    }

    for rule in rules {
        let state = if rule.enabled { "on " } else { "off" };
        println!(
            "{:>4}  {}  {:<12} {}",
            rule.priority, state, rule.id, rule.name
        );
    }
    Ok(())
}

fn execute_show(ctx: &Context, rule_id: &str) -> CmdResult {
    let rule = ctx.workspace.get_rule(rule_id)?;
    if ctx.json {
        return print_json(rule);
    }
    print!("{}", render_rule(rule));
    Ok(())
}

fn execute_eval(ctx: &Context, args: EvalArgs) -> CmdResult {
    let rule = ctx.workspace.get_rule(&args.rule_id)?;
    let input = args.input.to_input(&ctx.workspace)?;

    let evaluation = evaluate_rule(rule, &input);
    if ctx.json {
        return print_json(&evaluation);
    }
    print!("{}", render_evaluation(rule, &evaluation));
    Ok(())
}

/// Apply a command and print the rule book it leaves behind
fn execute_mutation(ctx: &mut Context, cmd: Command) -> CmdResult {
    let workspace = std::mem::take(&mut ctx.workspace);
    let (workspace, result) = apply(workspace, cmd, &ctx.role)?;
    ctx.workspace = workspace;

    match &result {
        CommandResult::RuleCreated { rule_id } => eprintln!("✓ Created {}", rule_id),
        CommandResult::RuleDeleted { rule } => eprintln!("✓ Deleted {}", rule.id),
        CommandResult::Updated => eprintln!("✓ Updated"),
    }
    execute_list(ctx)
}
