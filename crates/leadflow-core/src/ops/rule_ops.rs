use chrono::Utc;

use super::workspace::Workspace;
use crate::errors::{LeadFlowError, Result};
use crate::id::uid;
use crate::model::{Action, Condition, Field, Operator, Rule};

/// Buyer new rules route to when the workspace has no buyers yet
const DEFAULT_BUYER_ID: &str = "b1";

/// Create a new rule with editor defaults
///
/// The rule is enabled, named "New rule", gets a priority one above the
/// current maximum (at least 1), tests `source contains ""` and routes both
/// branches to the first buyer.
///
/// # Returns
/// The ID of the new rule
///
/// # Errors
/// * `InvalidValue` - an existing rule already has priority `i64::MAX`
/// * `RuleAlreadyExists` - the generated id collides
pub fn create_rule(ws: &mut Workspace) -> Result<String> {
    let highest = ws.list_rules().iter().map(|r| r.priority).fold(0, i64::max);
    let priority = highest
        .checked_add(1)
        .ok_or_else(|| LeadFlowError::InvalidValue {
            kind: "priority",
            value: highest.to_string(),
        })?;

    let buyer_id = ws
        .list_buyers()
        .first()
        .map(|b| b.id.clone())
        .unwrap_or_else(|| DEFAULT_BUYER_ID.to_string());

    let id = uid("rule");
    let rule = Rule::new(id.clone(), "New rule", priority, Action::route(buyer_id.clone()))
        .with_condition(Condition::new(Field::Source, Operator::Contains, ""))
        .with_fallback(Action::route(buyer_id));

    ws.insert_rule(rule)?;
    tracing::debug!(rule_id = %id, priority, "rule created");
    Ok(id)
}

/// Replace a stored rule with an edited version
///
/// Stamps `updated_at` and re-sorts the rule book.
///
/// # Errors
/// * `InvalidName` - name is empty or whitespace-only
/// * `RuleNotFound` - no rule with `rule.id`
/// * `UnknownBuyerReference` - an action routes to a buyer that does not exist
pub fn save_rule(ws: &mut Workspace, mut rule: Rule) -> Result<()> {
    if rule.name.trim().is_empty() {
        return Err(LeadFlowError::InvalidName {
            reason: "Rule name cannot be empty or whitespace-only".to_string(),
        });
    }

    check_buyer_references(ws, &rule)?;

    rule.updated_at = Utc::now();
    let slot = ws.get_rule_mut(&rule.id)?;
    *slot = rule;
    ws.sort_rules();
    Ok(())
}

/// Enable or disable a rule
///
/// # Errors
/// Returns `RuleNotFound` if the rule does not exist.
pub fn set_rule_enabled(ws: &mut Workspace, rule_id: &str, enabled: bool) -> Result<()> {
    let rule = ws.get_rule_mut(rule_id)?;
    rule.enabled = enabled;
    rule.updated_at = Utc::now();
    Ok(())
}

/// Delete a rule, returning it
///
/// # Errors
/// Returns `RuleNotFound` if the rule does not exist.
pub fn delete_rule(ws: &mut Workspace, rule_id: &str) -> Result<Rule> {
    ws.remove_rule(rule_id)
}

/// Check that every `Route` action of `rule` targets a known buyer
///
/// # Errors
/// Returns `UnknownBuyerReference` for the first unknown buyer id.
pub fn check_buyer_references(ws: &Workspace, rule: &Rule) -> Result<()> {
    for buyer_id in rule.referenced_buyers() {
        if ws.get_buyer(buyer_id).is_err() {
            return Err(LeadFlowError::UnknownBuyerReference {
                rule_id: rule.id.clone(),
                buyer_id: buyer_id.to_string(),
            });
        }
    }
    Ok(())
}
