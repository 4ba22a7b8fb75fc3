mod common;

use common::sample_leads;
use leadflow_core::ops::lead_query::distinct_sources;
use leadflow_core::ops::{filter_leads, LeadQuery, SortKey};
use leadflow_core::LeadStatus;

fn ids(query: &LeadQuery) -> Vec<String> {
    let leads = sample_leads();
    filter_leads(&leads, query)
        .into_iter()
        .map(|l| l.id.clone())
        .collect()
}

#[test]
fn test_default_query_is_newest_first() {
    assert_eq!(
        ids(&LeadQuery::default()),
        vec!["LD-10492", "LD-10490", "LD-10489", "LD-10488"]
    );
}

#[test]
fn test_oldest_first() {
    let query = LeadQuery {
        sort: SortKey::Oldest,
        ..Default::default()
    };
    assert_eq!(
        ids(&query),
        vec!["LD-10488", "LD-10489", "LD-10490", "LD-10492"]
    );
}

#[test]
fn test_name_sorts() {
    let asc = LeadQuery {
        sort: SortKey::NameAsc,
        ..Default::default()
    };
    assert_eq!(
        ids(&asc),
        vec!["LD-10489", "LD-10490", "LD-10492", "LD-10488"]
    );

    let desc = LeadQuery {
        sort: SortKey::NameDesc,
        ..Default::default()
    };
    assert_eq!(
        ids(&desc),
        vec!["LD-10488", "LD-10492", "LD-10490", "LD-10489"]
    );
}

#[test]
fn test_text_query_matches_id_name_phone_and_email() {
    let by_id = LeadQuery {
        q: "ld-10490".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&by_id), vec!["LD-10490"]);

    let by_name = LeadQuery {
        q: " PETROV ".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&by_name), vec!["LD-10492"]);

    let by_phone = LeadQuery {
        q: "222 1010".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&by_phone), vec!["LD-10488"]);

    let by_email = LeadQuery {
        q: "elena@".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&by_email), vec!["LD-10489"]);
}

#[test]
fn test_status_and_source_filters_combine() {
    let query = LeadQuery {
        source: Some("Meta Lead Ads".to_string()),
        status: Some(LeadStatus::Pending),
        ..Default::default()
    };
    assert_eq!(ids(&query), vec!["LD-10488"]);

    let none = LeadQuery {
        source: Some("Webhook".to_string()),
        status: Some(LeadStatus::Rejected),
        ..Default::default()
    };
    assert!(ids(&none).is_empty());
}

#[test]
fn test_distinct_sources_sorted() {
    assert_eq!(
        distinct_sources(&sample_leads()),
        vec!["CSV Import", "Meta Lead Ads", "Webhook"]
    );
}
