//! Apply API Demonstration
//!
//! Builds a small workspace through `apply()` and routes a few inputs.
//!
//! Key concepts illustrated:
//! 1. State threading (apply returns the new state)
//! 2. Role checks on write commands
//! 3. Per-rule evaluation vs ruleset routing
#![allow(clippy::unwrap_used, clippy::expect_used)]

use leadflow_core::render::{render_decision, render_evaluation};
use leadflow_core::{
    apply, evaluate_rule, route, Action, Buyer, Command, CommandResult, Condition, Field,
    Operator, Role, RuleInput, Workspace,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== LeadFlow Apply API Demo ===\n");

    // ===== Part 1: State Threading =====
    println!("## Part 1: State Threading\n");

    let mut state = Workspace::new();
    state.insert_buyer(Buyer::new("b1", "SolarPro BG", "https://api.solarpro.bg/leads"));
    state.insert_buyer(Buyer::new("b3", "Backup Buyer", "https://backup.example.com/leads"));

    let (state, created) = apply(state, Command::RuleCreate, &Role::Admin)?;
    let CommandResult::RuleCreated { rule_id } = created else {
        return Err("expected a new rule".into());
    };
    println!("✓ Created {}", rule_id);

    let mut rule = state.get_rule(&rule_id)?.clone();
    rule.name = "Meta leads in Sofia".to_string();
    rule.conditions = vec![
        Condition::new(Field::Source, Operator::Contains, "Meta"),
        Condition::new(Field::City, Operator::Equals, "Sofia"),
    ];
    rule.fallback_action = Some(Action::route("b3"));
    let (state, _) = apply(state, Command::RuleSave { rule }, &Role::Admin)?;
    println!("✓ Saved {}\n", rule_id);

    // ===== Part 2: Role Checks =====
    println!("## Part 2: Role Checks\n");

    let denied = apply(state.clone(), Command::RuleCreate, &Role::Viewer);
    match denied {
        Err(e) => println!("✓ Viewer rejected: {}\n", e),
        Ok(_) => println!("✗ Viewer was allowed to write\n"),
    }

    // ===== Part 3: Evaluation =====
    println!("## Part 3: Evaluation\n");

    let rule = state.get_rule(&rule_id)?;
    let varna = RuleInput {
        city: "Varna".to_string(),
        ..RuleInput::sample()
    };
    print!("{}", render_evaluation(rule, &evaluate_rule(rule, &varna)));
    println!();
    print!("{}", render_decision(&route(state.list_rules(), &RuleInput::sample())));

    Ok(())
}
