use super::value::{coerce_number, FieldValue};
use super::{Branch, ConditionCheck, RuleEvaluation, RuleInput};
use crate::model::{Condition, Operator, Rule};

/// Test one condition against an input
///
/// Never fails: values that cannot be compared simply do not pass.
pub fn evaluate_condition(condition: &Condition, input: &RuleInput) -> ConditionCheck {
    let actual = input.value_of(condition.field);
    let expected = if condition.field.is_numeric() {
        FieldValue::Number(Some(coerce_number(&condition.value)))
    } else {
        FieldValue::Text(condition.value.clone())
    };

    let pass = match condition.op {
        Operator::Equals => match (actual.as_text(), expected.as_text()) {
            (Some(a), Some(e)) => a == e,
            _ => false,
        },
        Operator::Contains => match (actual.as_text(), expected.as_text()) {
            (Some(a), Some(e)) => a.contains(&e),
            _ => false,
        },
        // NaN on either side makes both comparisons false
        Operator::Gt => match (actual.as_number(), expected.as_number()) {
            (Some(a), Some(e)) => a > e,
            _ => false,
        },
        Operator::Lt => match (actual.as_number(), expected.as_number()) {
            (Some(a), Some(e)) => a < e,
            _ => false,
        },
    };

    ConditionCheck {
        field: condition.field,
        op: condition.op,
        expected: condition.value.clone(),
        actual,
        pass,
    }
}

/// Evaluate a rule against an input
///
/// Every condition is checked (no short-circuit) so that the evaluation can
/// be shown line by line.
pub fn evaluate_rule(rule: &Rule, input: &RuleInput) -> RuleEvaluation {
    if !rule.enabled {
        return RuleEvaluation {
            rule_id: rule.id.clone(),
            matched: false,
            branch: Branch::Disabled,
            action: None,
            checks: Vec::new(),
        };
    }

    let checks: Vec<ConditionCheck> = rule
        .conditions
        .iter()
        .map(|c| evaluate_condition(c, input))
        .collect();

    if checks.iter().all(|c| c.pass) {
        RuleEvaluation {
            rule_id: rule.id.clone(),
            matched: true,
            branch: Branch::Then,
            action: Some(rule.action.clone()),
            checks,
        }
    } else {
        RuleEvaluation {
            rule_id: rule.id.clone(),
            matched: false,
            branch: Branch::Else,
            action: rule.fallback_action.clone(),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, Field};

    fn check(field: Field, op: Operator, value: &str, input: &RuleInput) -> bool {
        evaluate_condition(&Condition::new(field, op, value), input).pass
    }

    #[test]
    fn test_text_operators() {
        let input = RuleInput::sample();

        assert!(check(Field::Source, Operator::Contains, "Meta", &input));
        assert!(check(Field::City, Operator::Equals, "Sofia", &input));
        assert!(!check(Field::City, Operator::Equals, "sofia", &input));
        assert!(check(Field::Status, Operator::Contains, "", &input));
    }

    #[test]
    fn test_budget_compares_numbers() {
        let input = RuleInput::sample();

        assert!(check(Field::Budget, Operator::Gt, "10000", &input));
        assert!(!check(Field::Budget, Operator::Lt, "10000", &input));
        assert!(check(Field::Budget, Operator::Equals, "12000.0", &input));
        assert!(!check(Field::Budget, Operator::Gt, "lots", &input));
    }

    #[test]
    fn test_check_reports_expected_and_actual() {
        let c = evaluate_condition(
            &Condition::new(Field::Budget, Operator::Gt, "10000"),
            &RuleInput::sample(),
        );
        assert_eq!(c.expected, "10000");
        assert_eq!(c.actual, FieldValue::Number(Some(12000.0)));
        assert!(c.pass);
    }

    #[test]
    fn test_disabled_rule_reports_no_checks() {
        let mut rule = Rule::new("r1", "Meta", 1, Action::route("b1"))
            .with_condition(Condition::new(Field::Source, Operator::Contains, "Meta"))
            .with_fallback(Action::route("b3"));
        rule.enabled = false;

        let eval = evaluate_rule(&rule, &RuleInput::sample());
        assert_eq!(eval.branch, Branch::Disabled);
        assert!(eval.action.is_none());
        assert!(eval.checks.is_empty());
    }
}
