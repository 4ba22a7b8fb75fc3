use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::LeadFlowError;

/// Lead field a condition can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Source,
    City,
    Budget,
    Status,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Source, Field::City, Field::Budget, Field::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Source => "source",
            Field::City => "city",
            Field::Budget => "budget",
            Field::Status => "status",
        }
    }

    /// Human label used in editors and reports
    pub fn label(&self) -> &'static str {
        match self {
            Field::Source => "Source",
            Field::City => "City",
            Field::Budget => "Budget",
            Field::Status => "Status",
        }
    }

    /// Whether conditions on this field compare numbers rather than text
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Budget)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = LeadFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| LeadFlowError::InvalidValue {
                kind: "field",
                value: s.to_string(),
            })
    }
}

/// Comparison operator of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    Contains,
    Gt,
    Lt,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Equals,
        Operator::Contains,
        Operator::Gt,
        Operator::Lt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = LeadFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| LeadFlowError::InvalidValue {
                kind: "operator",
                value: s.to_string(),
            })
    }
}

/// A single `field op value` test; a rule ANDs all of its conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: Field,
    pub op: Operator,
    /// Raw value as typed by the rule author. Parsed as a number for
    /// numeric fields and for `gt`/`lt`.
    #[serde(default)]
    pub value: String,
}

impl Condition {
    pub fn new(field: Field, op: Operator, value: impl Into<String>) -> Self {
        Self {
            field,
            op,
            value: value.into(),
        }
    }
}

/// What happens to a lead when a rule branch is taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Deliver to the buyer with this id
    Route { buyer_id: String },
    Reject { reason: String },
    Tag { tag: String },
}

impl Action {
    pub fn route(buyer_id: impl Into<String>) -> Self {
        Action::Route {
            buyer_id: buyer_id.into(),
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Action::Reject {
            reason: reason.into(),
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Action::Tag { tag: tag.into() }
    }

    /// Buyer id targeted by a `Route` action
    pub fn buyer_id(&self) -> Option<&str> {
        match self {
            Action::Route { buyer_id } => Some(buyer_id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Route { buyer_id } => write!(f, "route -> {}", buyer_id),
            Action::Reject { reason } => write!(f, "reject ({})", reason),
            Action::Tag { tag } => write!(f, "tag #{}", tag),
        }
    }
}

/// Rule - an IF/THEN/ELSE routing rule
///
/// Conditions are AND-combined. When they all hold the primary `action`
/// fires; otherwise the optional `fallback_action` applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,

    pub name: String,

    pub enabled: bool,

    /// Lower values are evaluated first
    pub priority: i64,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    pub action: Action,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_action: Option<Action>,

    pub updated_at: DateTime<Utc>,
}

impl Rule {
    /// Create an enabled rule with no conditions and no fallback
    pub fn new(id: impl Into<String>, name: impl Into<String>, priority: i64, action: Action) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            priority,
            conditions: Vec::new(),
            action,
            fallback_action: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_fallback(mut self, action: Action) -> Self {
        self.fallback_action = Some(action);
        self
    }

    /// Buyer ids referenced by the primary and fallback actions
    pub fn referenced_buyers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&self.action)
            .chain(self.fallback_action.as_ref())
            .filter_map(Action::buyer_id)
    }
}
