//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import. Timestamps may be given either
//! absolutely (`created_at`) or relative to load time (`age_minutes`), so that
//! demo data always looks recent.

use chrono::{DateTime, Duration, Utc};
use leadflow_core::model::{
    AuthType, DailyVolume, DashboardStats, DeliveryOutcome, FieldMapRow,
};
use leadflow_core::{Action, Field, LeadStatus, Operator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub buyers: Vec<SeedBuyer>,

    #[serde(default)]
    pub rules: Vec<SeedRule>,

    #[serde(default)]
    pub leads: Vec<SeedLead>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<DashboardStats>,

    #[serde(default)]
    pub daily_volume: Vec<DailyVolume>,
}

/// Buyer definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBuyer {
    pub id: String,
    pub name: String,

    #[serde(default = "default_true")]
    pub active: bool,

    pub endpoint: String,

    #[serde(default = "default_auth_type")]
    pub auth_type: AuthType,

    /// 0 means uncapped
    #[serde(default)]
    pub daily_cap: u32,

    #[serde(default)]
    pub sent_today: u32,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub mapping: Vec<FieldMapRow>,
}

/// Rule definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRule {
    pub id: String,
    pub name: String,

    #[serde(default = "default_true")]
    pub enabled: bool,

    pub priority: i64,

    #[serde(default)]
    pub conditions: Vec<SeedCondition>,

    pub action: Action,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_action: Option<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<i64>,
}

/// Condition definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCondition {
    pub field: Field,
    pub op: Operator,

    /// Condition value (a YAML string, number or bool; kept as text)
    #[serde(default, deserialize_with = "deserialize_value")]
    pub value: String,
}

/// Lead definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLead {
    pub id: String,
    pub name: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub source: String,
    pub status: LeadStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    #[serde(default)]
    pub delivery_attempts: Vec<SeedAttempt>,

    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Delivery attempt definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAttempt {
    pub id: String,
    pub buyer: String,
    pub response_code: u16,
    pub latency_ms: u64,
    pub outcome: DeliveryOutcome,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<i64>,
}

/// Resolve a seed timestamp: an absolute `created_at` wins over
/// `age_minutes`; with neither, the timestamp is `now`.
///
/// Returns `None` when `age_minutes` puts the timestamp outside the
/// representable range.
pub fn resolve_time(
    at: Option<DateTime<Utc>>,
    age_minutes: Option<i64>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (at, age_minutes) {
        (Some(at), _) => Some(at),
        (None, Some(age)) => Duration::try_minutes(age).and_then(|d| now.checked_sub_signed(d)),
        (None, None) => Some(now),
    }
}

fn default_true() -> bool {
    true
}

fn default_auth_type() -> AuthType {
    AuthType::None
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Custom deserializer for condition values: rule authors write
/// `value: 10000` as often as `value: "10000"`
fn deserialize_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or bool")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ValueVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_seed() {
        let yaml = r#"
schema_version: 0
buyers:
  - id: b1
    name: "SolarPro BG"
    endpoint: "https://api.solarpro.bg/leads"
rules: []
"#;

        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.schema_version, 0);
        assert_eq!(seed.buyers.len(), 1);
        assert!(seed.buyers[0].active);
        assert_eq!(seed.buyers[0].auth_type, AuthType::None);
        assert_eq!(seed.buyers[0].timeout_ms, 5000);
        assert!(seed.leads.is_empty());
        assert!(seed.stats.is_none());
    }

    #[test]
    fn test_condition_value_forms() {
        let yaml = r#"
field: budget
op: gt
value: 10000
"#;
        let cond: SeedCondition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cond.value, "10000");

        let yaml = r#"
field: source
op: contains
"#;
        let cond: SeedCondition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cond.value, "");

        let yaml = r#"
field: city
op: equals
value: "Sofia"
"#;
        let cond: SeedCondition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cond.value, "Sofia");
    }

    #[test]
    fn test_resolve_time() {
        let now = Utc::now();
        assert_eq!(resolve_time(None, None, now), Some(now));
        assert_eq!(resolve_time(None, Some(6), now), Some(now - Duration::minutes(6)));
        let at = now - Duration::days(2);
        assert_eq!(resolve_time(Some(at), Some(6), now), Some(at));
    }

    #[test]
    fn test_resolve_time_out_of_range() {
        let now = Utc::now();
        assert_eq!(resolve_time(None, Some(9_000_000_000_000_000), now), None);
        assert_eq!(resolve_time(None, Some(i64::MIN), now), None);
        assert_eq!(resolve_time(None, Some(-9_000_000_000_000), now), None);
    }
}
