use chrono::{Duration, Utc};
use leadflow_core::model::{AuthType, DailyVolume, DashboardStats, FieldMapRow};
use leadflow_core::{Action, Buyer, Condition, Field, Lead, LeadStatus, Operator, Rule, Workspace};

/// The three demo buyers
#[allow(dead_code)]
pub fn sample_buyers() -> Vec<Buyer> {
    let mut solar = Buyer::new("b1", "SolarPro BG", "https://api.solarpro.bg/leads");
    solar.auth_type = AuthType::Bearer;
    solar.daily_cap = 250;
    solar.sent_today = 118;
    solar.timeout_ms = 6000;
    solar.mapping = vec![
        FieldMapRow::new("name", "full_name"),
        FieldMapRow::new("phone", "phone"),
        FieldMapRow::new("email", "email"),
        FieldMapRow::new("city", "city"),
        FieldMapRow::new("budget", "budget"),
        FieldMapRow::new("source", "source"),
    ];

    let mut heat = Buyer::new("b2", "HeatPump Partner", "https://leads.heatpump.bg/intake");
    heat.auth_type = AuthType::ApiKey;
    heat.daily_cap = 120;
    heat.sent_today = 96;
    heat.timeout_ms = 8000;
    heat.mapping = vec![
        FieldMapRow::new("name", "name"),
        FieldMapRow::new("phone", "phone_number"),
        FieldMapRow::new("city", "city"),
        FieldMapRow::new("budget", "estimate_budget"),
        FieldMapRow::new("source", "campaign_source"),
    ];

    let mut backup = Buyer::new("b3", "Backup Buyer", "https://backup.example.com/leads");
    backup.active = false;
    backup.daily_cap = 9999;
    backup.mapping = vec![
        FieldMapRow::new("name", "name"),
        FieldMapRow::new("phone", "phone"),
        FieldMapRow::new("source", "source"),
    ];

    vec![solar, heat, backup]
}

/// Demo rules: r3 (P0) rejects duplicates, r1 (P1) routes Meta/Sofia leads
/// to b1 with a b3 fallback, r2 (P2) routes big budgets to b2
#[allow(dead_code)]
pub fn sample_rules() -> Vec<Rule> {
    vec![
        Rule::new("r1", "Meta leads to SolarPro", 1, Action::route("b1"))
            .with_condition(Condition::new(Field::Source, Operator::Contains, "Meta"))
            .with_condition(Condition::new(Field::City, Operator::Equals, "Sofia"))
            .with_fallback(Action::route("b3")),
        Rule::new("r2", "Budget over 10k to HeatPump", 2, Action::route("b2"))
            .with_condition(Condition::new(Field::Budget, Operator::Gt, "10000")),
        Rule::new("r3", "Reject duplicates", 0, Action::reject("Duplicate lead"))
            .with_condition(Condition::new(Field::Status, Operator::Equals, "duplicate")),
    ]
}

#[allow(dead_code)]
pub fn sample_leads() -> Vec<Lead> {
    let now = Utc::now();

    let mut ivan = Lead::new(
        "LD-10492",
        "Ivan Petrov",
        "+359 88 123 4567",
        "Meta Lead Ads",
        LeadStatus::Delivered,
        now - Duration::minutes(6),
    );
    ivan.city = Some("Sofia".to_string());
    ivan.budget = Some(12000.0);
    ivan.buyer = Some("SolarPro BG".to_string());

    let georgi = Lead::new(
        "LD-10490",
        "Georgi Dimitrov",
        "+359 87 321 9988",
        "CSV Import",
        LeadStatus::Rejected,
        now - Duration::minutes(32),
    );

    let mut elena = Lead::new(
        "LD-10489",
        "Elena Ivanova",
        "+359 88 990 1100",
        "Webhook",
        LeadStatus::Accepted,
        now - Duration::minutes(44),
    );
    elena.email = Some("elena@example.com".to_string());
    elena.buyer = Some("HeatPump Partner".to_string());

    let nikolay = Lead::new(
        "LD-10488",
        "Nikolay Georgiev",
        "+359 88 222 1010",
        "Meta Lead Ads",
        LeadStatus::Pending,
        now - Duration::minutes(68),
    );

    vec![ivan, georgi, elena, nikolay]
}

/// A workspace holding all of the demo data
#[allow(dead_code)]
pub fn sample_workspace() -> Workspace {
    let mut ws = Workspace::new();
    for buyer in sample_buyers() {
        ws.insert_buyer(buyer);
    }
    for rule in sample_rules() {
        ws.insert_rule(rule).unwrap();
    }
    for lead in sample_leads() {
        ws.insert_lead(lead);
    }
    ws.stats = DashboardStats {
        leads_today: 2314,
        delivered_today: 1987,
        rejected_today: 214,
        revenue_today: 1420.5,
        acceptance_rate: 0.86,
    };
    ws.daily_volume = vec![DailyVolume {
        day: "Mon".to_string(),
        leads: 1680,
    }];
    ws
}
