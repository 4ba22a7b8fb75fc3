//! Buyer Operation Tests

mod common;

use common::sample_workspace;
use leadflow_core::model::FieldMapRow;
use leadflow_core::ops::buyer_ops::{
    preview_payload, sample_lead, save_mapping, search_buyers, set_buyer_active, set_daily_cap,
    validate_mapping,
};
use leadflow_core::ops::{cap_state, CapState};
use leadflow_core::LeadFlowError;
use serde_json::Value;

#[test]
fn test_search_is_trimmed_and_case_insensitive() {
    let ws = sample_workspace();
    let names: Vec<&str> = search_buyers(&ws, "  pro ")
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(names, vec!["SolarPro BG"]);

    assert_eq!(search_buyers(&ws, "").len(), 3);
    assert!(search_buyers(&ws, "nobody").is_empty());
}

#[test]
fn test_cap_states_of_sample_buyers() {
    let ws = sample_workspace();
    let states: Vec<CapState> = ws
        .list_buyers()
        .iter()
        .map(|b| cap_state(b.sent_today, b.daily_cap))
        .collect();
    assert_eq!(states, vec![CapState::Ok, CapState::NearCap, CapState::Ok]);
}

#[test]
fn test_cap_state_boundary() {
    assert_eq!(cap_state(79, 100), CapState::Ok);
    assert_eq!(cap_state(80, 100), CapState::NearCap);
    assert_eq!(cap_state(99, 100), CapState::NearCap);
    assert_eq!(cap_state(100, 100), CapState::CapReached);
    assert_eq!(cap_state(0, 0), CapState::NoCap);
    assert_eq!(CapState::NearCap.label(), "Near cap");
}

#[test]
fn test_toggle_and_cap_updates() {
    let mut ws = sample_workspace();
    set_buyer_active(&mut ws, "b3", true).unwrap();
    set_daily_cap(&mut ws, "b3", 0).unwrap();

    let b3 = ws.get_buyer("b3").unwrap();
    assert!(b3.active);
    assert_eq!(cap_state(b3.sent_today, b3.daily_cap), CapState::NoCap);

    assert!(matches!(
        set_buyer_active(&mut ws, "b9", true),
        Err(LeadFlowError::BuyerNotFound { .. })
    ));
}

#[test]
fn test_validate_mapping_errors() {
    let missing = vec![
        FieldMapRow::new("name", "name"),
        FieldMapRow::new("phone", "  "),
    ];
    assert_eq!(
        validate_mapping(&missing),
        Err(LeadFlowError::MappingTargetMissing { row: 1 })
    );

    let duplicate = vec![
        FieldMapRow::new("name", "contact"),
        FieldMapRow::new("phone", "contact"),
    ];
    assert_eq!(
        validate_mapping(&duplicate),
        Err(LeadFlowError::DuplicateMappingTarget {
            field: "contact".to_string()
        })
    );

    let unknown = vec![FieldMapRow::new("zip", "zip")];
    assert_eq!(
        validate_mapping(&unknown),
        Err(LeadFlowError::UnknownInternalField {
            field: "zip".to_string()
        })
    );

    assert!(validate_mapping(&[]).is_ok());
}

#[test]
fn test_invalid_mapping_is_not_saved() {
    let mut ws = sample_workspace();
    let before = ws.get_buyer("b2").unwrap().mapping.clone();

    let rows = vec![FieldMapRow::new("name", "")];
    assert!(save_mapping(&mut ws, "b2", rows).is_err());
    assert_eq!(ws.get_buyer("b2").unwrap().mapping, before);

    let rows = vec![FieldMapRow::new("name", "lead_name")];
    save_mapping(&mut ws, "b2", rows.clone()).unwrap();
    assert_eq!(ws.get_buyer("b2").unwrap().mapping, rows);
}

#[test]
fn test_preview_for_heatpump_mapping() {
    let ws = sample_workspace();
    let payload = preview_payload(&ws.get_buyer("b2").unwrap().mapping, &sample_lead());

    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["campaign_source", "city", "estimate_budget", "name", "phone_number"]
    );
    assert_eq!(payload["campaign_source"], Value::from("Simulation"));
    assert_eq!(payload["phone_number"], Value::from("+359 88 000 0000"));
}

#[test]
fn test_preview_later_row_wins() {
    let rows = vec![
        FieldMapRow::new("name", "contact"),
        FieldMapRow::new("email", "contact"),
    ];
    let payload = preview_payload(&rows, &sample_lead());
    assert_eq!(payload["contact"], Value::from("test@example.com"));
}

#[test]
fn test_preview_status_and_missing_fields() {
    let mut lead = sample_lead();
    lead.email = None;
    let rows = vec![
        FieldMapRow::new("status", "state"),
        FieldMapRow::new("email", "mail"),
    ];
    let payload = preview_payload(&rows, &lead);
    assert_eq!(payload["state"], Value::from("delivered"));
    assert_eq!(payload["mail"], Value::Null);
}
