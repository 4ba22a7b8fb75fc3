//! Rule Evaluation Tests
//!
//! Covers per-condition semantics of the four operators over the four
//! fields, and per-rule branch selection.

use leadflow_core::rules_engine::{evaluate_condition, Branch, FieldValue};
use leadflow_core::{evaluate_rule, Action, Condition, Field, Operator, Rule, RuleInput};

fn input(source: &str, city: &str, budget: Option<f64>, status: &str) -> RuleInput {
    RuleInput {
        source: source.to_string(),
        city: city.to_string(),
        budget,
        status: status.to_string(),
    }
}

fn check(field: Field, op: Operator, value: &str, input: &RuleInput) -> bool {
    evaluate_condition(&Condition::new(field, op, value), input).pass
}

#[test]
fn test_equals_is_exact_and_case_sensitive() {
    let i = RuleInput::sample();
    assert!(check(Field::City, Operator::Equals, "Sofia", &i));
    assert!(!check(Field::City, Operator::Equals, "sofia", &i));
    assert!(!check(Field::City, Operator::Equals, "Sofia ", &i));
    assert!(check(Field::Status, Operator::Equals, "delivered", &i));
}

#[test]
fn test_contains_substring() {
    let i = RuleInput::sample();
    assert!(check(Field::Source, Operator::Contains, "Meta", &i));
    assert!(check(Field::Source, Operator::Contains, "Lead Ads", &i));
    assert!(!check(Field::Source, Operator::Contains, "meta", &i));
}

#[test]
fn test_contains_empty_value_passes_on_text_fields() {
    let i = input("", "", Some(0.0), "");
    assert!(check(Field::Source, Operator::Contains, "", &i));
    assert!(check(Field::City, Operator::Contains, "", &i));
    assert!(check(Field::Status, Operator::Contains, "", &i));
}

#[test]
fn test_budget_contains_empty_value_looks_for_zero_digit() {
    // blank coerces to 0, so the test becomes "has a 0 digit"
    assert!(check(Field::Budget, Operator::Contains, "", &input("", "", Some(0.0), "")));
    assert!(check(Field::Budget, Operator::Contains, "", &RuleInput::sample()));
    assert!(!check(Field::Budget, Operator::Contains, "", &input("", "", Some(12345.0), "")));
    assert!(!check(Field::Budget, Operator::Contains, "", &input("", "", None, "")));
}

#[test]
fn test_budget_comparisons() {
    let i = RuleInput::sample();
    assert!(check(Field::Budget, Operator::Gt, "10000", &i));
    assert!(!check(Field::Budget, Operator::Gt, "12000", &i));
    assert!(check(Field::Budget, Operator::Lt, "12000.5", &i));
    assert!(!check(Field::Budget, Operator::Lt, "12000", &i));
    assert!(check(Field::Budget, Operator::Gt, " 1e3 ", &i));
}

#[test]
fn test_budget_equals_uses_canonical_number() {
    let i = RuleInput::sample();
    assert!(check(Field::Budget, Operator::Equals, "12000", &i));
    assert!(check(Field::Budget, Operator::Equals, "12000.0", &i));
    assert!(check(Field::Budget, Operator::Equals, "1.2e4", &i));
    assert!(!check(Field::Budget, Operator::Equals, "12,000", &i));
}

#[test]
fn test_budget_contains_digits() {
    let i = RuleInput::sample();
    assert!(check(Field::Budget, Operator::Contains, "200", &i));
    assert!(!check(Field::Budget, Operator::Contains, "999", &i));
}

#[test]
fn test_blank_threshold_is_zero() {
    let i = RuleInput::sample();
    assert!(check(Field::Budget, Operator::Gt, "", &i));
    assert!(check(Field::Budget, Operator::Gt, "   ", &i));
    assert!(!check(Field::Budget, Operator::Lt, "", &i));
}

#[test]
fn test_unparseable_threshold_never_compares() {
    let i = RuleInput::sample();
    assert!(!check(Field::Budget, Operator::Gt, "lots", &i));
    assert!(!check(Field::Budget, Operator::Lt, "lots", &i));
}

#[test]
fn test_text_fields_compare_numerically_for_gt_lt() {
    let numeric_city = input("Webhook", "42", Some(1.0), "pending");
    assert!(check(Field::City, Operator::Gt, "41", &numeric_city));
    assert!(check(Field::City, Operator::Lt, "100", &numeric_city));

    let i = RuleInput::sample();
    assert!(!check(Field::City, Operator::Gt, "0", &i));
    assert!(!check(Field::City, Operator::Lt, "0", &i));
}

#[test]
fn test_blank_text_field_counts_as_zero() {
    let i = input("Webhook", "", None, "pending");
    assert!(check(Field::City, Operator::Lt, "1", &i));
    assert!(!check(Field::City, Operator::Gt, "0", &i));
}

#[test]
fn test_missing_budget_fails_every_operator() {
    let i = input("Webhook", "Sofia", None, "pending");
    for op in Operator::ALL {
        let result = evaluate_condition(&Condition::new(Field::Budget, op, ""), &i);
        assert!(!result.pass, "{} should fail on a missing budget", op);
        assert_eq!(result.actual, FieldValue::Number(None));
    }
}

#[test]
fn test_check_reports_expected_and_actual() {
    let result = evaluate_condition(
        &Condition::new(Field::Budget, Operator::Gt, "10000"),
        &RuleInput::sample(),
    );
    assert_eq!(result.field, Field::Budget);
    assert_eq!(result.op, Operator::Gt);
    assert_eq!(result.expected, "10000");
    assert_eq!(result.actual, FieldValue::Number(Some(12000.0)));
    assert!(result.pass);
}

#[test]
fn test_all_conditions_pass_takes_then_branch() {
    let rule = Rule::new("r1", "Meta Sofia", 1, Action::route("b1"))
        .with_condition(Condition::new(Field::Source, Operator::Contains, "Meta"))
        .with_condition(Condition::new(Field::City, Operator::Equals, "Sofia"))
        .with_fallback(Action::route("b3"));

    let eval = evaluate_rule(&rule, &RuleInput::sample());
    assert!(eval.matched);
    assert_eq!(eval.branch, Branch::Then);
    assert_eq!(eval.action, Some(Action::route("b1")));
    assert_eq!(eval.checks.len(), 2);
}

#[test]
fn test_any_failure_takes_else_branch_and_reports_every_check() {
    let rule = Rule::new("r1", "Plovdiv", 1, Action::route("b1"))
        .with_condition(Condition::new(Field::City, Operator::Equals, "Plovdiv"))
        .with_condition(Condition::new(Field::Budget, Operator::Gt, "100"))
        .with_fallback(Action::tag("elsewhere"));

    let eval = evaluate_rule(&rule, &RuleInput::sample());
    assert!(!eval.matched);
    assert_eq!(eval.branch, Branch::Else);
    assert_eq!(eval.action, Some(Action::tag("elsewhere")));
    let passes: Vec<bool> = eval.checks.iter().map(|c| c.pass).collect();
    assert_eq!(passes, vec![false, true]);
}

#[test]
fn test_else_branch_without_fallback_has_no_action() {
    let rule = Rule::new("r2", "Big budget", 2, Action::route("b2"))
        .with_condition(Condition::new(Field::Budget, Operator::Gt, "50000"));

    let eval = evaluate_rule(&rule, &RuleInput::sample());
    assert_eq!(eval.branch, Branch::Else);
    assert_eq!(eval.action, None);
}

#[test]
fn test_rule_without_conditions_matches() {
    let rule = Rule::new("r0", "Catch all", 9, Action::tag("all"));
    let eval = evaluate_rule(&rule, &RuleInput::sample());
    assert!(eval.matched);
    assert_eq!(eval.branch, Branch::Then);
    assert!(eval.checks.is_empty());
}

#[test]
fn test_disabled_rule_is_not_evaluated() {
    let mut rule = Rule::new("r1", "Off", 1, Action::route("b1"))
        .with_condition(Condition::new(Field::City, Operator::Equals, "Sofia"))
        .with_fallback(Action::route("b3"));
    rule.enabled = false;

    let eval = evaluate_rule(&rule, &RuleInput::sample());
    assert!(!eval.matched);
    assert_eq!(eval.branch, Branch::Disabled);
    assert_eq!(eval.action, None);
    assert!(eval.checks.is_empty());
}

#[test]
fn test_input_from_lead_without_city_or_budget() {
    use chrono::Utc;
    use leadflow_core::{Lead, LeadStatus};

    let lead = Lead::new("LD-1", "A", "1", "CSV Import", LeadStatus::Rejected, Utc::now());
    let i = RuleInput::from_lead(&lead);
    assert_eq!(i.city, "");
    assert_eq!(i.budget, None);
    assert_eq!(i.status, "rejected");
}
