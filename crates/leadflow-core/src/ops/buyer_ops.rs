use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

use super::workspace::Workspace;
use crate::errors::{LeadFlowError, Result};
use crate::model::{Buyer, FieldMapRow, Lead, LeadStatus, INTERNAL_FIELDS};

/// How close a buyer is to its daily delivery cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapState {
    NoCap,
    Ok,
    NearCap,
    CapReached,
}

impl CapState {
    pub fn label(&self) -> &'static str {
        match self {
            CapState::NoCap => "No cap",
            CapState::Ok => "OK",
            CapState::NearCap => "Near cap",
            CapState::CapReached => "Cap reached",
        }
    }
}

/// Share of the cap at which a buyer counts as near its cap
const NEAR_CAP_RATIO: f64 = 0.8;

pub fn cap_state(sent_today: u32, daily_cap: u32) -> CapState {
    if daily_cap == 0 {
        return CapState::NoCap;
    }
    let ratio = f64::from(sent_today) / f64::from(daily_cap);
    if ratio >= 1.0 {
        CapState::CapReached
    } else if ratio >= NEAR_CAP_RATIO {
        CapState::NearCap
    } else {
        CapState::Ok
    }
}

/// Buyers whose name contains `query` (trimmed, case-insensitive)
///
/// A blank query returns every buyer.
pub fn search_buyers<'a>(ws: &'a Workspace, query: &str) -> Vec<&'a Buyer> {
    let needle = query.trim().to_lowercase();
    ws.list_buyers()
        .iter()
        .filter(|b| needle.is_empty() || b.name.to_lowercase().contains(&needle))
        .collect()
}

/// # Errors
/// Returns `BuyerNotFound` if the buyer does not exist.
pub fn set_buyer_active(ws: &mut Workspace, buyer_id: &str, active: bool) -> Result<()> {
    ws.get_buyer_mut(buyer_id)?.active = active;
    tracing::debug!(buyer_id, active, "buyer toggled");
    Ok(())
}

/// # Errors
/// Returns `BuyerNotFound` if the buyer does not exist.
pub fn set_daily_cap(ws: &mut Workspace, buyer_id: &str, daily_cap: u32) -> Result<()> {
    ws.get_buyer_mut(buyer_id)?.daily_cap = daily_cap;
    Ok(())
}

/// Replace a buyer's field mapping after validating it
///
/// # Errors
/// * `BuyerNotFound` - the buyer does not exist
/// * any error from `validate_mapping`
pub fn save_mapping(ws: &mut Workspace, buyer_id: &str, mapping: Vec<FieldMapRow>) -> Result<()> {
    validate_mapping(&mapping)?;
    ws.get_buyer_mut(buyer_id)?.mapping = mapping;
    Ok(())
}

/// Validate a field mapping
///
/// Rows are checked in order and the first problem is reported.
///
/// # Errors
/// * `UnknownInternalField` - `from` is not one of `INTERNAL_FIELDS`
/// * `MappingTargetMissing` - `to` is blank
/// * `DuplicateMappingTarget` - two rows share the same `to`
pub fn validate_mapping(rows: &[FieldMapRow]) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, row) in rows.iter().enumerate() {
        if !INTERNAL_FIELDS.contains(&row.from.as_str()) {
            return Err(LeadFlowError::UnknownInternalField {
                field: row.from.clone(),
            });
        }
        if row.to.trim().is_empty() {
            return Err(LeadFlowError::MappingTargetMissing { row: idx });
        }
        if !seen.insert(row.to.as_str()) {
            return Err(LeadFlowError::DuplicateMappingTarget {
                field: row.to.clone(),
            });
        }
    }
    Ok(())
}

/// Payload a buyer would receive for `lead` under `rows`
///
/// Rows with an empty `to` are skipped; when two rows share a `to`, the
/// later one wins. Unset optional lead fields map to `null`.
pub fn preview_payload(rows: &[FieldMapRow], lead: &Lead) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    for row in rows.iter().filter(|r| !r.to.is_empty()) {
        out.insert(row.to.clone(), lead.internal_field(&row.from));
    }
    out
}

/// The synthetic lead used for mapping previews
pub fn sample_lead() -> Lead {
    let mut lead = Lead::new(
        "SAMPLE",
        "Test Lead",
        "+359 88 000 0000",
        "Simulation",
        LeadStatus::Delivered,
        Utc::now(),
    );
    lead.email = Some("test@example.com".to_string());
    lead.city = Some("Sofia".to_string());
    lead.budget = Some(12000.0);
    lead
}
