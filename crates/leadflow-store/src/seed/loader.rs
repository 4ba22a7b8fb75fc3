//! Loading a parsed seed into a workspace

use std::time::Instant;

use chrono::{DateTime, Utc};
use leadflow_core::model::DeliveryAttempt;
use leadflow_core::{log_op_end, log_op_error, log_op_start};
use leadflow_core::{Buyer, Condition, Lead, Rule, Workspace};

use crate::errors::{from_domain, seed_validation, Result};
use crate::seed::format_v0::{resolve_time, SeedBuyer, SeedLead, SeedRule, SeedV0};

/// Build a workspace from a validated seed
///
/// Relative timestamps (`age_minutes`) are resolved against the current time.
///
/// # Errors
///
/// Returns `ERR_ALREADY_EXISTS` if the seed repeats a rule id. Seeds coming
/// from `parse_seed_str` have already been checked for that.
pub fn load_workspace(seed: &SeedV0) -> Result<Workspace> {
    let start = Instant::now();
    log_op_start!("seed_load", rule_count = seed.rules.len());

    match build(seed, Utc::now()) {
        Ok(ws) => {
            log_op_end!(
                "seed_load",
                duration_ms = start.elapsed().as_millis() as u64,
                buyers = ws.list_buyers().len(),
                leads = ws.list_leads().len(),
            );
            Ok(ws)
        }
        Err(err) => {
            log_op_error!(
                "seed_load",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn build(seed: &SeedV0, now: DateTime<Utc>) -> Result<Workspace> {
    let mut ws = Workspace::new();

    for buyer in &seed.buyers {
        ws.insert_buyer(to_buyer(buyer));
    }

    for rule in &seed.rules {
        ws.insert_rule(to_rule(rule, now)?)
            .map_err(|e| from_domain("seed_load", e))?;
    }

    for lead in &seed.leads {
        ws.insert_lead(to_lead(lead, now)?);
    }

    if let Some(stats) = &seed.stats {
        ws.stats = stats.clone();
    }
    ws.daily_volume = seed.daily_volume.clone();

    Ok(ws)
}

fn to_buyer(seed: &SeedBuyer) -> Buyer {
    let mut buyer = Buyer::new(seed.id.clone(), seed.name.clone(), seed.endpoint.clone());
    buyer.active = seed.active;
    buyer.auth_type = seed.auth_type;
    buyer.daily_cap = seed.daily_cap;
    buyer.sent_today = seed.sent_today;
    buyer.timeout_ms = seed.timeout_ms;
    buyer.mapping = seed.mapping.clone();
    buyer
}

fn to_rule(seed: &SeedRule, now: DateTime<Utc>) -> Result<Rule> {
    let mut rule = Rule::new(
        seed.id.clone(),
        seed.name.clone(),
        seed.priority,
        seed.action.clone(),
    );
    rule.enabled = seed.enabled;
    rule.conditions = seed
        .conditions
        .iter()
        .map(|c| Condition::new(c.field, c.op, c.value.clone()))
        .collect();
    rule.fallback_action = seed.fallback_action.clone();
    rule.updated_at = resolve(seed.updated_at, seed.age_minutes, now, "rule", &seed.id)?;
    Ok(rule)
}

fn to_lead(seed: &SeedLead, now: DateTime<Utc>) -> Result<Lead> {
    let mut lead = Lead::new(
        seed.id.clone(),
        seed.name.clone(),
        seed.phone.clone(),
        seed.source.clone(),
        seed.status,
        resolve(seed.created_at, seed.age_minutes, now, "lead", &seed.id)?,
    );
    lead.email = seed.email.clone();
    lead.buyer = seed.buyer.clone();
    lead.city = seed.city.clone();
    lead.budget = seed.budget;
    lead.payload = seed.payload.clone();
    lead.delivery_attempts = seed
        .delivery_attempts
        .iter()
        .map(|a| {
            Ok(DeliveryAttempt {
                id: a.id.clone(),
                buyer: a.buyer.clone(),
                response_code: a.response_code,
                latency_ms: a.latency_ms,
                created_at: resolve(a.created_at, a.age_minutes, now, "attempt", &a.id)?,
                outcome: a.outcome,
            })
        })
        .collect::<Result<_>>()?;
    Ok(lead)
}

fn resolve(
    at: Option<DateTime<Utc>>,
    age_minutes: Option<i64>,
    now: DateTime<Utc>,
    kind: &str,
    id: &str,
) -> Result<DateTime<Utc>> {
    resolve_time(at, age_minutes, now)
        .ok_or_else(|| seed_validation(&format!("age_minutes out of range on {} {}", kind, id)))
}
