//! Conversions between `HeaderMap` and JSON header objects.
//!
//! Header objects in dynamic values come as `{"name": "value"}` or
//! `{"name": ["v1", "v2"]}`. Entries that are not valid header names or
//! values are skipped.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

/// Build a `HeaderMap` from a JSON object. Returns `None` for non-objects.
pub fn headers_from_json(value: &Value) -> Option<HeaderMap> {
    let obj = value.as_object()?;
    let mut headers = HeaderMap::new();
    for (k, v) in obj {
        let name = match HeaderName::from_bytes(k.as_bytes()) {
            Ok(n) => n,
            Err(_) => continue,
        };
        match v {
            Value::Array(items) => {
                for item in items {
                    if let Some(hv) = scalar_header_value(item) {
                        headers.append(name.clone(), hv);
                    }
                }
            }
            other => {
                if let Some(hv) = scalar_header_value(other) {
                    headers.append(name, hv);
                }
            }
        }
    }
    Some(headers)
}

fn scalar_header_value(v: &Value) -> Option<HeaderValue> {
    let s = match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    HeaderValue::from_str(&s).ok()
}

/// Render a `HeaderMap` as a JSON object; repeated names become arrays.
pub fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut obj = Map::new();
    for name in headers.keys() {
        let values: Vec<Value> = headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(|s| Value::String(s.to_string()))
            .collect();
        let entry = if values.len() == 1 {
            values.into_iter().next().unwrap_or(Value::Null)
        } else {
            Value::Array(values)
        };
        obj.insert(name.as_str().to_string(), entry);
    }
    Value::Object(obj)
}
