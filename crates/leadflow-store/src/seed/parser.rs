//! Seed parser with validation
//!
//! Parses YAML and validates schema version, id uniqueness, buyer
//! references, field mappings and relative timestamps

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::{resolve_time, SeedV0};
use chrono::{DateTime, Utc};
use leadflow_core::ops::buyer_ops::validate_mapping;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
///
/// # Errors
///
/// `ERR_IO` if the file cannot be read, otherwise any error from
/// `parse_seed_str`.
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
///
/// # Errors
///
/// `ERR_INVALID_INPUT` for malformed YAML or a seed that fails validation.
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    check_unique("buyer", seed.buyers.iter().map(|b| b.id.as_str()))?;
    check_unique("rule", seed.rules.iter().map(|r| r.id.as_str()))?;
    check_unique("lead", seed.leads.iter().map(|l| l.id.as_str()))?;

    for buyer in &seed.buyers {
        validate_mapping(&buyer.mapping).map_err(|e| {
            seed_validation(&format!("Invalid mapping on buyer {}: {}", buyer.id, e))
        })?;
    }

    let now = Utc::now();
    for lead in &seed.leads {
        check_age("lead", &lead.id, lead.age_minutes, now)?;
        for attempt in &lead.delivery_attempts {
            check_age("attempt", &attempt.id, attempt.age_minutes, now)?;
        }
    }

    let buyer_ids: HashSet<&str> = seed.buyers.iter().map(|b| b.id.as_str()).collect();

    for rule in &seed.rules {
        if rule.name.trim().is_empty() {
            return Err(seed_validation(&format!("Rule {} has an empty name", rule.id)));
        }

        check_age("rule", &rule.id, rule.age_minutes, now)?;

        let targets = std::iter::once(&rule.action)
            .chain(rule.fallback_action.as_ref())
            .filter_map(|a| a.buyer_id());
        for buyer_id in targets {
            if !buyer_ids.contains(buyer_id) {
                return Err(seed_validation(&format!(
                    "Rule {} routes to non-existent buyer: {}",
                    rule.id, buyer_id
                )));
            }
        }
    }

    Ok(())
}

/// `age_minutes` must land inside the representable date range
fn check_age(kind: &str, id: &str, age_minutes: Option<i64>, now: DateTime<Utc>) -> Result<()> {
    match resolve_time(None, age_minutes, now) {
        Some(_) => Ok(()),
        None => Err(seed_validation(&format!(
            "age_minutes out of range on {} {}",
            kind, id
        ))),
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(seed_validation(&format!("Duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_seed() {
        let yaml = r#"
schema_version: 0
buyers:
  - id: b1
    name: "SolarPro BG"
    endpoint: "https://api.solarpro.bg/leads"
rules:
  - id: r1
    name: "Everything to SolarPro"
    priority: 1
    action: { type: route, buyer_id: b1 }
"#;

        let result = parse_seed_str(yaml);
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_reject_invalid_schema_version() {
        let yaml = r#"
schema_version: 99
"#;

        let result = parse_seed_str(yaml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_reject_duplicate_rule_ids() {
        let yaml = r#"
schema_version: 0
rules:
  - id: r1
    name: "One"
    priority: 1
    action: { type: tag, tag: one }
  - id: r1
    name: "Again"
    priority: 2
    action: { type: tag, tag: two }
"#;

        let err = parse_seed_str(yaml).unwrap_err();
        assert!(err.message().contains("Duplicate rule id: r1"));
    }
}
