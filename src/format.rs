//! Display formatting for result values.
//!
//! Numbers follow the `en-IN` convention used across the dashboard: the last
//! three integer digits form one group and the remaining digits are grouped
//! in pairs (`12,34,567.5`).

use serde_json::Value;

use crate::column::is_rate_column;

const CRORE: f64 = 1e7;
const LAKH: f64 = 1e5;
const THOUSAND: f64 = 1e3;

/// Placeholder shown for null values.
pub(crate) const MISSING: &str = "-";

/// Interprets a JSON scalar as a number, accepting numeric strings.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Renders a non-numeric scalar as plain text.
pub(crate) fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn format_number(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_grouped_2),
        other => display_scalar(other),
    }
}

pub(crate) fn format_currency(value: &Value) -> String {
    let Value::Number(n) = value else {
        return format_number(value);
    };
    let Some(v) = n.as_f64() else {
        return n.to_string();
    };
    if v >= CRORE {
        format!("{} Cr", to_fixed(v / CRORE, 2))
    } else if v >= LAKH {
        format!("{} L", to_fixed(v / LAKH, 2))
    } else if v >= THOUSAND {
        format!("{} K", to_fixed(v / THOUSAND, 1))
    } else {
        format_grouped_2(v)
    }
}

pub(crate) fn format_percent(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), |v| format!("{}%", to_fixed(v, 2))),
        other => display_scalar(other),
    }
}

/// Label drawn on a bar or point, or `None` when the value gets no label.
///
/// Null and zero values are never labeled.
pub(crate) fn format_bar_label(key: &str, value: &Value) -> Option<String> {
    let v = as_number(value)?;
    if v == 0.0 {
        return None;
    }
    if is_rate_column(key) {
        Some(format!("{}%", to_fixed(v, 1)))
    } else {
        Some(format_grouped(v, 0))
    }
}

/// Tooltip text: numbers are grouped, everything else is shown as-is.
pub(crate) fn format_tooltip(value: &Value) -> String {
    match value {
        Value::Number(_) => format_number(value),
        other => display_scalar(other),
    }
}

fn format_grouped_2(v: f64) -> String {
    format_grouped(v, 2)
}

/// Formats `v` with Indian digit grouping and at most `max_fraction` fraction
/// digits, trailing zeros trimmed.
pub(crate) fn format_grouped(v: f64, max_fraction: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let fixed = to_fixed(v.abs(), max_fraction);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + 8);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if v < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Renders `v` with exactly `digits` fraction digits, rounding halves away
/// from zero.
fn to_fixed(v: f64, digits: usize) -> String {
    format!("{:.*}", digits, round_half_away(v, digits))
}

fn round_half_away(v: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / scale
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_number(&json!(0)), "0");
        assert_eq!(format_number(&json!(999)), "999");
        assert_eq!(format_number(&json!(1000)), "1,000");
        assert_eq!(format_number(&json!(123_456)), "1,23,456");
        assert_eq!(format_number(&json!(12_345_678)), "1,23,45,678");
        assert_eq!(format_number(&json!(-98_765.4)), "-98,765.4");
    }

    #[test]
    fn number_fraction_digits() {
        assert_eq!(format_number(&json!(1234.5678)), "1,234.57");
        assert_eq!(format_number(&json!(2.5)), "2.5");
        assert_eq!(format_number(&json!(3.0)), "3");
        assert_eq!(format_number(&json!(-0.001)), "0");
    }

    #[test]
    fn number_passthrough() {
        assert_eq!(format_number(&Value::Null), "-");
        assert_eq!(format_number(&json!("Karnataka")), "Karnataka");
        assert_eq!(format_number(&json!(true)), "true");
    }

    #[test]
    fn currency_units() {
        assert_eq!(format_currency(&json!(25_000_000)), "2.50 Cr");
        assert_eq!(format_currency(&json!(150_000)), "1.50 L");
        assert_eq!(format_currency(&json!(4_560)), "4.6 K");
        assert_eq!(format_currency(&json!(512.346)), "512.35");
        assert_eq!(format_currency(&Value::Null), "-");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(&json!(12.3456)), "12.35%");
        assert_eq!(format_percent(&json!(7)), "7.00%");
        assert_eq!(format_percent(&Value::Null), "-");
    }

    #[test]
    fn bar_labels() {
        assert_eq!(
            format_bar_label("Conversion Rate", &json!(42.27)).as_deref(),
            Some("42.3%")
        );
        assert_eq!(
            format_bar_label("Total AUM", &json!(1_234_567.8)).as_deref(),
            Some("12,34,568")
        );
        assert_eq!(format_bar_label("Total AUM", &json!(0)), None);
        assert_eq!(format_bar_label("Total AUM", &Value::Null), None);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_percent(&json!(12.125)), "12.13%");
        assert_eq!(format_bar_label("SMS Cost", &json!(2.5)).as_deref(), Some("3"));
        assert_eq!(format_number(&json!(1.125)), "1.13");
        assert_eq!(format_number(&json!(-1.125)), "-1.13");
        assert_eq!(format_currency(&json!(11_250_000)), "1.13 Cr");
        assert_eq!(
            format_bar_label("Collection Rate", &json!(0.25)).as_deref(),
            Some("0.3%")
        );
    }

    #[test]
    fn tooltip() {
        assert_eq!(format_tooltip(&json!(15000)), "15,000");
        assert_eq!(format_tooltip(&json!("North")), "North");
    }
}
