//! Value coercion shared by the condition operators.

use serde::Serialize;

/// Actual value of a field at evaluation time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// `None` when the lead has no value for a numeric field
    Number(Option<f64>),
}

impl FieldValue {
    /// Canonical string form, `None` for a missing number
    pub(crate) fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => n.map(format_number),
        }
    }

    /// Numeric form, `None` for a missing number
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Text(s) => Some(coerce_number(s)),
            FieldValue::Number(n) => *n,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("(missing)"),
        }
    }
}

/// Coerce authored text to a number
///
/// Surrounding whitespace is ignored and blank text is `0`. Decimal,
/// exponent, `0x`/`0o`/`0b` and `Infinity` forms are accepted; anything else
/// is `NaN`, which fails every comparison.
pub(crate) fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // f64::from_str also takes "inf"/"nan" spellings; only plain numerals count here
    let numeral = t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeral {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned digits after a radix prefix; no sign, at least one digit
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Magnitudes from here up print in exponent form
const EXP_UPPER: f64 = 1e21;
/// Magnitudes below this print in exponent form
const EXP_LOWER: f64 = 1e-6;

/// Canonical string form of a number: integral values have no fraction
/// (`12000`, not `12000.0`), and very large or very small magnitudes use
/// exponent form with an explicit sign (`1e+21`, `1.5e-7`)
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= EXP_UPPER || n.abs() < EXP_LOWER {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
