use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::{plain_value, MONEY_FIELDS};
use crate::input::currency::format_brl;

/// Format the envelope as tables: a summary, then the numbered installment
/// list when the result carries one, then warnings and methodology.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", plain_value(value));
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => {
            print_summary(result);
            if let Some(Value::Array(installments)) = result.get("installments") {
                print_installments(installments);
            }
        }
        _ => print_summary(envelope),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_summary(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if val.is_array() {
            continue;
        }
        builder.push_record([key.clone(), format_field(key, val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_installments(installments: &[Value]) {
    if installments.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["#", "Installment"]);
    for (i, amount) in installments.iter().enumerate() {
        builder.push_record([(i + 1).to_string(), format_field("installment", amount)]);
    }
    println!("\n{}", Table::from(builder));
}

fn format_field(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = value.as_str().and_then(|s| Decimal::from_str(s).ok()) {
            return format_brl(amount);
        }
    }
    plain_value(value)
}
