use serde_json::Value;
use std::io;

use super::plain_value;

/// Write the result as two-column `field,value` CSV to stdout.
///
/// The per-period installment list expands to one `installments[n]` row per
/// period so the file stays rectangular.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = wtr.write_record(["field", "value"]);
    match result {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Array(items) => {
                        for (i, item) in items.iter().enumerate() {
                            let field = format!("{}[{}]", key, i + 1);
                            let _ = wtr.write_record([field.as_str(), &plain_value(item)]);
                        }
                    }
                    _ => {
                        let _ = wtr.write_record([key.as_str(), &plain_value(val)]);
                    }
                }
            }
        }
        _ => {
            let _ = wtr.write_record(["result", &plain_value(result)]);
        }
    }

    let _ = wtr.flush();
}
