use crate::model::Rule;
use crate::rules_engine::RuleEvaluation;

/// Render a rule as an IF/THEN/ELSE block
///
/// ```text
/// [P1] High budget Sofia (r1, enabled)
/// IF city equals "Sofia"
/// AND budget gt "10000"
/// THEN route -> b1
/// ELSE tag #low_budget
/// ```
pub fn render_rule(rule: &Rule) -> String {
    let mut output = String::new();

    let state = if rule.enabled { "enabled" } else { "disabled" };
    output.push_str(&format!(
        "[P{}] {} ({}, {})\n",
        rule.priority, rule.name, rule.id, state
    ));

    if rule.conditions.is_empty() {
        output.push_str("IF (always)\n");
    }
    for (idx, cond) in rule.conditions.iter().enumerate() {
        let keyword = if idx == 0 { "IF" } else { "AND" };
        output.push_str(&format!(
            "{} {} {} \"{}\"\n",
            keyword, cond.field, cond.op, cond.value
        ));
    }

    output.push_str(&format!("THEN {}\n", rule.action));
    match &rule.fallback_action {
        Some(fallback) => output.push_str(&format!("ELSE {}\n", fallback)),
        None => output.push_str("ELSE (no action)\n"),
    }

    output
}

/// Render the result of testing one rule
///
/// One line per condition, then the branch taken and its action:
///
/// ```text
/// city equals "Sofia"  PASS
/// budget gt "10000"  FAIL
/// Decision: ELSE branch
/// Action: tag #low_budget
/// ```
pub fn render_evaluation(rule: &Rule, evaluation: &RuleEvaluation) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rule: {} ({})\n", rule.name, rule.id));

    for check in &evaluation.checks {
        let verdict = if check.pass { "PASS" } else { "FAIL" };
        output.push_str(&format!(
            "{} {} \"{}\"  {}\n",
            check.field, check.op, check.expected, verdict
        ));
    }

    output.push_str(&format!("Decision: {}\n", evaluation.branch.label()));
    match &evaluation.action {
        Some(action) => output.push_str(&format!("Action: {}\n", action)),
        None => output.push_str("Action: none\n"),
    }

    output
}
