//! Rule evaluation engine.
//!
//! Decides what happens to a lead given an ordered set of routing rules.
//!
//! ## Per-rule evaluation
//!
//! `evaluate_rule()` checks every condition of a rule against a `RuleInput`
//! and reports each check, so that editors can show PASS/FAIL per line. A
//! disabled rule is not evaluated at all and reports `Branch::Disabled`.
//! A rule whose conditions all hold takes the THEN branch (its `action`);
//! otherwise it takes the ELSE branch (its `fallback_action`, which may be
//! absent). A rule with no conditions always takes the THEN branch.
//!
//! ## Ruleset routing
//!
//! `route()` orders rules by ascending priority (ties keep their input
//! order) and fires the first enabled rule that takes its THEN branch. When
//! no rule matches, the fallback of the first enabled rule that declares one
//! fires instead. Otherwise the lead is left unrouted (`NoMatch`).
//!
//! ## Value semantics
//!
//! `budget` is numeric; `source`, `city` and `status` are text. `gt`/`lt`
//! always compare numbers, coercing text (blank text is `0`, anything
//! unparseable never compares). `equals`/`contains` compare the canonical
//! string forms, so `budget equals "12000.0"` holds for a budget of 12000.
//! A lead without a budget fails every budget condition.

mod evaluate;
mod route;
mod value;

pub use evaluate::{evaluate_condition, evaluate_rule};
pub use route::{route, route_lead};
pub use value::FieldValue;

use crate::model::{Action, Field, Lead, Operator};
use serde::{Deserialize, Serialize};

/// The lead attributes rules can test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleInput {
    pub source: String,
    pub city: String,
    pub budget: Option<f64>,
    /// Free text: editors may test statuses that are not `LeadStatus` values
    pub status: String,
}

impl RuleInput {
    /// Project a lead onto the fields rules can see
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            source: lead.source.clone(),
            city: lead.city.clone().unwrap_or_default(),
            budget: lead.budget,
            status: lead.status.as_str().to_string(),
        }
    }

    /// The sample input preloaded in the rule editor's test panel
    pub fn sample() -> Self {
        Self {
            source: "Meta Lead Ads".to_string(),
            city: "Sofia".to_string(),
            budget: Some(12000.0),
            status: "delivered".to_string(),
        }
    }

    /// Actual value of `field` for this input
    pub fn value_of(&self, field: Field) -> FieldValue {
        match field {
            Field::Source => FieldValue::Text(self.source.clone()),
            Field::City => FieldValue::Text(self.city.clone()),
            Field::Budget => FieldValue::Number(self.budget),
            Field::Status => FieldValue::Text(self.status.clone()),
        }
    }
}

impl Default for RuleInput {
    fn default() -> Self {
        Self::sample()
    }
}

/// Outcome of testing one condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionCheck {
    pub field: Field,
    pub op: Operator,
    /// Condition value as authored
    pub expected: String,
    pub actual: FieldValue,
    pub pass: bool,
}

/// Which branch of a rule was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Then,
    Else,
    Disabled,
}

impl Branch {
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Then => "THEN branch",
            Branch::Else => "ELSE branch",
            Branch::Disabled => "Disabled",
        }
    }
}

/// Result of evaluating a single rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleEvaluation {
    pub rule_id: String,
    pub matched: bool,
    pub branch: Branch,
    /// Action of the branch taken; `None` when disabled or when the ELSE
    /// branch has no fallback
    pub action: Option<Action>,
    pub checks: Vec<ConditionCheck>,
}

/// What routing decided for a lead
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutingOutcome {
    /// A rule's conditions held and its primary action fired
    Matched { rule_id: String, action: Action },
    /// No rule matched; this rule's fallback action fired
    Fallback { rule_id: String, action: Action },
    NoMatch,
}

impl RoutingOutcome {
    pub fn action(&self) -> Option<&Action> {
        match self {
            RoutingOutcome::Matched { action, .. } | RoutingOutcome::Fallback { action, .. } => {
                Some(action)
            }
            RoutingOutcome::NoMatch => None,
        }
    }

    pub fn rule_id(&self) -> Option<&str> {
        match self {
            RoutingOutcome::Matched { rule_id, .. } | RoutingOutcome::Fallback { rule_id, .. } => {
                Some(rule_id)
            }
            RoutingOutcome::NoMatch => None,
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingOutcome::Matched { .. } => "matched",
            RoutingOutcome::Fallback { .. } => "fallback",
            RoutingOutcome::NoMatch => "no_match",
        }
    }
}

/// Full routing trace: the decision plus every rule evaluation in the order
/// rules were considered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    pub outcome: RoutingOutcome,
    pub evaluations: Vec<RuleEvaluation>,
}
