//! Conversions from loosely-typed TOML values
//!
//! Every function here is total over [`toml::Value`]: a value either converts
//! or yields a reason string that the loader wraps into a `ConfigError`.

use toml::Value;

/// Coerce a TOML value into an integer.
///
/// Accepts integers, floats without a fractional part, and decimal strings
/// (surrounding whitespace, a leading sign and `_` digit separators are
/// allowed). Booleans, dates, arrays and tables are rejected.
pub fn coerce_integer(value: &Value) -> Result<i64, String> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) => float_to_integer(*f),
        Value::String(s) => parse_integer_str(s),
        other => Err(format!("expected an integer, got {}", other.type_str())),
    }
}

fn float_to_integer(f: f64) -> Result<i64, String> {
    if !f.is_finite() {
        return Err(format!("expected an integer, got {}", f));
    }
    if f.fract() != 0.0 {
        return Err(format!("expected an integer, got fractional number {}", f));
    }
    // i64::MAX is not representable as f64; 2^63 is the first value out of range
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(format!("integer {} is out of range", f));
    }
    Ok(f as i64)
}

fn parse_integer_str(s: &str) -> Result<i64, String> {
    let trimmed = s.trim();
    let (sign, digits) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    let malformed = digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if malformed {
        return Err(format!("expected an integer, got string {:?}", s));
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    format!("{sign}{cleaned}")
        .parse::<i64>()
        .map_err(|e| format!("cannot convert {:?} to an integer: {}", s, e))
}

/// Truthiness of a TOML value.
///
/// `false`, zero, empty strings, empty arrays and empty tables are falsy;
/// everything else (including dates) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Table(t) => !t.is_empty(),
        Value::Datetime(_) => true,
    }
}
