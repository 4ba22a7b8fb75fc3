use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::errors::LeadFlowError;

/// Lifecycle status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Accepted,
    Rejected,
    Duplicate,
    Pending,
    Delivered,
    Failed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::Delivered,
        LeadStatus::Accepted,
        LeadStatus::Pending,
        LeadStatus::Duplicate,
        LeadStatus::Rejected,
        LeadStatus::Failed,
    ];

    /// Lower-case wire name, also the value rule conditions compare against
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Accepted => "accepted",
            LeadStatus::Rejected => "rejected",
            LeadStatus::Duplicate => "duplicate",
            LeadStatus::Pending => "pending",
            LeadStatus::Delivered => "delivered",
            LeadStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = LeadFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LeadFlowError::InvalidValue {
                kind: "lead status",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Success,
    Failed,
}

/// One attempt at pushing a lead to a buyer endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAttempt {
    pub id: String,
    /// Buyer display name
    pub buyer: String,
    pub response_code: u16,
    pub latency_ms: u64,
    pub created_at: DateTime<Utc>,
    pub outcome: DeliveryOutcome,
}

/// Lead - a captured prospect waiting to be routed to a buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Display identifier, e.g. `LD-10492`
    pub id: String,

    pub name: String,

    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Acquisition channel ("Meta Lead Ads", "Webhook", ...)
    pub source: String,

    pub created_at: DateTime<Utc>,

    pub status: LeadStatus,

    /// Name of the buyer the lead was delivered to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_attempts: Vec<DeliveryAttempt>,

    /// Raw payload as received from the source
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub payload: Map<String, Value>,
}

impl Lead {
    /// Create a lead with only the required fields set
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        source: impl Into<String>,
        status: LeadStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            source: source.into(),
            created_at,
            status,
            buyer: None,
            city: None,
            budget: None,
            delivery_attempts: Vec::new(),
            payload: Map::new(),
        }
    }

    /// Value of an internal field (see `INTERNAL_FIELDS`) as JSON
    ///
    /// Returns `Value::Null` for optional fields that are not set and for
    /// names that are not internal fields.
    pub fn internal_field(&self, name: &str) -> Value {
        match name {
            "name" => Value::from(self.name.clone()),
            "phone" => Value::from(self.phone.clone()),
            "email" => self.email.clone().map(Value::from).unwrap_or(Value::Null),
            "city" => self.city.clone().map(Value::from).unwrap_or(Value::Null),
            "budget" => self.budget.map(json_number).unwrap_or(Value::Null),
            "source" => Value::from(self.source.clone()),
            "status" => Value::from(self.status.as_str()),
            _ => Value::Null,
        }
    }

    /// Most recent delivery attempt, if any
    pub fn last_attempt(&self) -> Option<&DeliveryAttempt> {
        self.delivery_attempts.iter().max_by_key(|a| a.created_at)
    }
}

/// Integral budgets serialize as integers (`12000`, not `12000.0`)
fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead::new(
            "LD-1",
            "Ivan Petrov",
            "+359 88 123 4567",
            "Meta Lead Ads",
            LeadStatus::Pending,
            Utc::now(),
        )
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in LeadStatus::ALL {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn test_internal_field_values() {
        let mut lead = lead();
        lead.budget = Some(12000.0);

        assert_eq!(lead.internal_field("name"), Value::from("Ivan Petrov"));
        assert_eq!(lead.internal_field("budget"), Value::from(12000));
        assert_eq!(lead.internal_field("status"), Value::from("pending"));
        assert_eq!(lead.internal_field("city"), Value::Null);
        assert_eq!(lead.internal_field("nope"), Value::Null);
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(lead()).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("delivery_attempts").is_none());
        assert_eq!(json["status"], "pending");
    }
}
