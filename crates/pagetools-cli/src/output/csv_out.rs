use serde_json::{Map, Value};
use std::io::{self, Write};

/// Write output as CSV to stdout.
///
/// Record lists (the amortization schedule, replay steps) become one row
/// per record. Scalar results become `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        tracing::warn!(error = %e, "failed to write csv");
    }
}

fn write_csv<W: Write>(out: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(out);

    match records_of(value) {
        Some(rows) => write_records(&mut wtr, rows)?,
        None => {
            let fields = value
                .get("result")
                .and_then(Value::as_object)
                .or_else(|| value.as_object());
            match fields {
                Some(map) => write_fields(&mut wtr, map)?,
                None => wtr.write_record([cell(value)])?,
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

fn records_of(value: &Value) -> Option<&[Value]> {
    let rows = value
        .pointer("/result/schedule")
        .or_else(|| value.get("steps"))
        .unwrap_or(value)
        .as_array()?;
    Some(rows.as_slice())
}

fn write_fields<W: Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        wtr.write_record([key.clone(), cell(val)])?;
    }
    Ok(())
}

fn write_records<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([cell(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&String> = first.keys().collect();
    wtr.write_record(&headers)?;
    for map in rows.iter().filter_map(Value::as_object) {
        wtr.write_record(
            headers
                .iter()
                .map(|h| map.get(h.as_str()).map(cell).unwrap_or_default()),
        )?;
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_schedule_rows() {
        let v = json!({"result": {"loan_amount": "1000", "schedule": [
            {"balance": "910", "interest": "10", "period": 1, "principal": "90"},
            {"balance": "819.1", "interest": "9.1", "period": 2, "principal": "90.9"}
        ]}});
        assert_eq!(
            render(&v),
            "balance,interest,period,principal\n910,10,1,90\n819.1,9.1,2,90.9\n"
        );
    }

    #[test]
    fn test_scalar_result_is_field_value() {
        let v = json!({"result": {"char_count": 9, "word_count": 2}});
        assert_eq!(render(&v), "field,value\nchar_count,9\nword_count,2\n");
    }
}
