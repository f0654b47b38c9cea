use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};
use std::str::FromStr;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// The `result` object becomes a Field/Value table; any array of records
/// inside it (the amortization schedule) gets a table of its own. Long
/// decimal strings are shown to two places.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => {
                print_result(result);
                print_footer(map);
            }
            _ => print_record_sections(map),
        },
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut sections: Vec<(&str, &[Value])> = Vec::new();

    for (key, val) in result {
        match val {
            Value::Array(rows) if is_record_list(rows) => sections.push((key, rows)),
            _ => builder.push_record([key.as_str(), &format_value(val)]),
        }
    }
    println!("{}", Table::from(builder));

    for (key, rows) in sections {
        println!("\n{}:", key);
        print_rows(rows);
    }
}

/// Objects without a `result` envelope, e.g. replay output.
fn print_record_sections(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if !matches!(val, Value::Array(rows) if is_record_list(rows)) {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
    }
    println!("{}", Table::from(builder));

    for (key, val) in map {
        if let Value::Array(rows) = val {
            if is_record_list(rows) {
                println!("\n{}:", key);
                print_rows(rows);
            }
        }
    }
}

fn print_footer(envelope: &Map<String, Value>) {
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

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        if rows.is_empty() {
            println!("(empty)");
        }
        for item in rows {
            println!("{}", format_value(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for map in rows.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }

    println!("{}", Table::from(builder));
}

fn is_record_list(rows: &[Value]) -> bool {
    rows.first().is_some_and(Value::is_object)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => round_decimal_string(s).unwrap_or_else(|| s.clone()),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_value(v)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Decimal strings with more than two fractional digits, rounded for display.
/// Rates keep their precision: only values of magnitude one or more are
/// rounded.
fn round_decimal_string(s: &str) -> Option<String> {
    let (_, frac) = s.split_once('.')?;
    if frac.len() <= 2 {
        return None;
    }
    let d = Decimal::from_str(s).ok()?;
    if d.abs() < Decimal::ONE {
        return None;
    }
    Some(
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_long_amounts_only() {
        assert_eq!(
            round_decimal_string("1073.6432460242797").as_deref(),
            Some("1073.64")
        );
        assert_eq!(round_decimal_string("12.5"), None);
        assert_eq!(round_decimal_string("0.0041666666666666666666666667"), None);
        assert_eq!(round_decimal_string("aB.cdef"), None);
    }

    #[test]
    fn test_record_list_detection() {
        assert!(is_record_list(&[serde_json::json!({"period": 1})]));
        assert!(!is_record_list(&[serde_json::json!(1)]));
        assert!(!is_record_list(&[]));
    }
}
