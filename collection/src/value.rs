//! Loose (coercive) equality over JSON values.
//!
//! Where clauses and identity lookups compare field values loosely: numbers
//! compare numerically regardless of integer or float representation, numeric
//! strings compare against numbers, booleans coerce to 0/1, and null equals
//! null. Everything else falls back to structural equality.

use serde_json::Value;

/// Compare two JSON values with coercive equality.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(_), Value::Number(_))
        | (Value::Number(_), Value::String(_))
        | (Value::String(_), Value::Number(_))
        | (Value::Bool(_), Value::Number(_))
        | (Value::Number(_), Value::Bool(_))
        | (Value::Bool(_), Value::String(_))
        | (Value::String(_), Value::Bool(_)) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => a == b,
    }
}

/// Numeric view of a value, following the usual coercion rules: booleans are
/// 0 or 1, strings parse as floats, non-numeric strings have no numeric view.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
