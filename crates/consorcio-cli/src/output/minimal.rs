use serde_json::Value;

use super::plain_value;

/// Print just the key answer of a schedule or bid simulation.
///
/// A term-reducing bid answers with the number of installments left; every
/// other result answers with its installment.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let key = match result.get("strategy").and_then(Value::as_str) {
        Some("reduce_term") => "remaining_installments",
        _ => "installment",
    };

    match result.get(key) {
        Some(val) if !val.is_null() => println!("{}", plain_value(val)),
        _ => println!("{}", plain_value(result)),
    }
}
