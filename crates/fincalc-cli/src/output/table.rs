use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Result fields holding currency amounts, rendered with a rupee prefix
/// and Indian-system digit grouping in the table view only.
const CURRENCY_FIELDS: [&str; 11] = [
    "principal",
    "first_payment",
    "total_interest",
    "total_payment",
    "invested_amount",
    "estimated_returns",
    "total_value",
    "total_amount",
    "principal_paid",
    "interest_paid",
    "remaining_balance",
];

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            // Check if "result" key holds the primary data
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        // Scalar fields form the summary table
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            if val.is_array() {
                continue;
            }
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);

        // Row arrays (schedules, yearly series, scenario lists) follow as
        // their own tables
        for (key, val) in res_map {
            if let Value::Array(rows) = val {
                println!("\n{}:", key);
                print_array_table(rows);
            }
        }
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_field(h, v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        // Simple array of values
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

/// Currency fields get the rupee treatment; everything else prints as-is.
fn format_field(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) if CURRENCY_FIELDS.contains(&key) => format_inr(s),
        _ => format_value(value),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_value(v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Indian-system currency formatting: `1234567.89` becomes `₹12,34,567.89`.
/// Strings that do not parse as decimals pass through untouched.
fn format_inr(raw: &str) -> String {
    let value: Decimal = match raw.parse() {
        Ok(value) => value,
        Err(_) => return raw.to_string(),
    };
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();

    let text = if magnitude.fract().is_zero() {
        magnitude.trunc().to_string()
    } else {
        format!("{magnitude:.2}")
    };
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_indian(whole);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// The last three digits form one group, every group before that holds two.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
