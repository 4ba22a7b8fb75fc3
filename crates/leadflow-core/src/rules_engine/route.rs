use std::time::Instant;

use super::{evaluate_rule, Branch, RoutingDecision, RoutingOutcome, RuleInput};
use crate::model::{Lead, Rule};
use crate::{log_op_end, log_op_start};

/// Route an input through a ruleset
///
/// `rules` may be in any order; they are considered by ascending priority.
pub fn route(rules: &[Rule], input: &RuleInput) -> RoutingDecision {
    let start = Instant::now();
    log_op_start!("route", rule_count = rules.len());

    let mut ordered: Vec<&Rule> = rules.iter().collect();
    // sort_by_key is stable: equal priorities keep their input order
    ordered.sort_by_key(|r| r.priority);

    let evaluations: Vec<_> = ordered.iter().map(|r| evaluate_rule(r, input)).collect();

    let matched = evaluations
        .iter()
        .find(|e| e.branch == Branch::Then)
        .and_then(|e| {
            e.action.clone().map(|action| RoutingOutcome::Matched {
                rule_id: e.rule_id.clone(),
                action,
            })
        });

    let outcome = matched
        .or_else(|| {
            ordered
                .iter()
                .filter(|r| r.enabled)
                .find_map(|r| {
                    r.fallback_action.clone().map(|action| RoutingOutcome::Fallback {
                        rule_id: r.id.clone(),
                        action,
                    })
                })
        })
        .unwrap_or(RoutingOutcome::NoMatch);

    log_op_end!(
        "route",
        duration_ms = start.elapsed().as_millis() as u64,
        outcome = outcome.kind(),
        rule_id = outcome.rule_id().unwrap_or_default(),
    );

    RoutingDecision {
        outcome,
        evaluations,
    }
}

/// Route a lead through a ruleset
pub fn route_lead(rules: &[Rule], lead: &Lead) -> RoutingDecision {
    tracing::debug!(lead_id = %lead.id, "routing lead");
    route(rules, &RuleInput::from_lead(lead))
}
