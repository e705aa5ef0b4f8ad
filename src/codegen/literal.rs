//! JavaScript literal formatting for emitted code.

use serde::Serialize;
use serde_json::Value;

/// Format a number the way JavaScript prints it: integral values without a fraction.
pub fn js_number(v: f64) -> String {
    if !v.is_finite() {
        return "null".to_string();
    }
    if v == v.trunc() && v.abs() < 1e15 {
        // Normalizes -0 as well.
        return format!("{}", v as i64);
    }
    format!("{v}")
}

/// Render a serializable value as a JavaScript object literal, e.g. `{ opacity: 0, y: 20 }`.
pub fn js_literal<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(v) => js_value(&v),
        // Unreachable for descriptor types.
        Err(_) => "undefined".to_string(),
    }
}

/// Render a JSON value as a JavaScript literal.
pub fn js_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => out.push_str(&i.to_string()),
            (None, Some(f)) => out.push_str(&js_number(f)),
            (None, None) => out.push_str(&n.to_string()),
        },
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    out.push_str(&quote(key));
                }
                out.push_str(": ");
                write_value(out, item);
            }
            out.push_str(" }");
        }
    }
}

/// Double-quoted JSON string literal (valid JavaScript).
pub fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/literal.rs"]
mod tests;
