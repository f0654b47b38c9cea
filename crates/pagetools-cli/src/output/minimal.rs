use serde_json::Value;

/// Print only the headline answer of a command.
///
/// Mortgage runs print the formatted monthly payment, password runs the
/// password, count runs `words chars` and replays a step count. Anything
/// else prints compact JSON.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result = value.get("result").unwrap_or(value);

    if let Some(payment) = result.pointer("/summary/monthly_payment").and_then(Value::as_str) {
        return payment.to_string();
    }
    if let Some(password) = result.get("password").and_then(Value::as_str) {
        return password.to_string();
    }
    if let (Some(words), Some(chars)) = (result.get("word_count"), result.get("char_count")) {
        return format!("{} {}", words, chars);
    }
    if let (Some(steps), Some(charts)) = (
        value.get("steps").and_then(Value::as_array),
        value.get("live_charts"),
    ) {
        return format!("{} steps, {} live charts", steps.len(), charts);
    }

    match result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
