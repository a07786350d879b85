//! Conversion of evaluated values to JSON, following `JSON.stringify`.

use serde_json::{Map, Number};

use super::Value;

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Value<'_> {
    /// Convert to a JSON value.
    ///
    /// `undefined` and functions have no JSON form: they are dropped from
    /// records, become `null` inside lists, and are `null` at the top level.
    pub fn to_json(&self) -> serde_json::Value {
        self.json_member().unwrap_or(serde_json::Value::Null)
    }

    fn json_member(&self) -> Option<serde_json::Value> {
        let json = match self {
            Value::Undefined | Value::Closure(_) | Value::Method(_) => return None,
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => json_number(*n),
            Value::Str(s) => serde_json::Value::String(s.to_string()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Record(record) => {
                let mut map = Map::with_capacity(record.len());
                for (key, value) in record.iter() {
                    if let Some(json) = value.json_member() {
                        map.insert(key.to_string(), json);
                    }
                }
                serde_json::Value::Object(map)
            }
        };
        Some(json)
    }
}

#[expect(clippy::cast_possible_truncation, reason = "integral and within the safe range")]
fn json_number(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        return serde_json::Value::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
