use crate::rules_engine::{RoutingDecision, RoutingOutcome};

/// Render a routing decision with its per-rule trace
///
/// The first line is the outcome; each evaluated rule follows in the order
/// it was considered, marked with the branch it took.
pub fn render_decision(decision: &RoutingDecision) -> String {
    let mut output = String::new();

    match &decision.outcome {
        RoutingOutcome::Matched { rule_id, action } => {
            output.push_str(&format!("Matched {}: {}\n", rule_id, action));
        }
        RoutingOutcome::Fallback { rule_id, action } => {
            output.push_str(&format!("Fallback from {}: {}\n", rule_id, action));
        }
        RoutingOutcome::NoMatch => output.push_str("No rule matched\n"),
    }

    for eval in &decision.evaluations {
        let passed = eval.checks.iter().filter(|c| c.pass).count();
        output.push_str(&format!(
            "  {} {} ({}/{} conditions)\n",
            eval.rule_id,
            eval.branch.label(),
            passed,
            eval.checks.len()
        ));
    }

    output
}
