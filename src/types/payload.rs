//! The data slot of a result: whatever the wrapped client produced.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fault::Fault;
use super::response::FetchResponse;

/// Payload carried in the data slot of a [`crate::SafeAwaitResult`] or inside
/// a normalized response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Parsed JSON (also used for any dynamic value classified from JSON)
    Json(Value),
    /// Body decoded as text
    Text(String),
    /// Opaque binary body
    Blob(Bytes),
    /// An unparsed fetch-style response standing in for its own body
    Response(Box<FetchResponse>),
    /// An exception value embedded as data
    Fault(Fault),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Payload::Fault(f) => Some(f),
            _ => None,
        }
    }

    /// Deserialize the payload into a typed value.
    ///
    /// JSON payloads deserialize directly, text payloads as a JSON string.
    /// Other variants have no JSON form and yield a validation error.
    pub fn json<T: DeserializeOwned>(&self) -> crate::Result<T> {
        let value = match self {
            Payload::Json(v) => v.clone(),
            Payload::Text(s) => Value::String(s.clone()),
            other => {
                return Err(crate::Error::validation_with_context(
                    "payload has no JSON representation",
                    crate::ErrorContext::new()
                        .with_details(other.variant_name())
                        .with_source("payload"),
                ))
            }
        };
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Payload::Json(_) => "json",
            Payload::Text(_) => "text",
            Payload::Blob(_) => "blob",
            Payload::Response(_) => "response",
            Payload::Fault(_) => "fault",
        }
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Json(v)
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<Bytes> for Payload {
    fn from(b: Bytes) -> Self {
        Payload::Blob(b)
    }
}

impl From<Fault> for Payload {
    fn from(f: Fault) -> Self {
        Payload::Fault(f)
    }
}

impl From<FetchResponse> for Payload {
    fn from(r: FetchResponse) -> Self {
        Payload::Response(Box::new(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_typed_access() {
        let payload = Payload::Json(json!({"id": 5}));
        let item: Item = payload.json().unwrap();
        assert_eq!(item, Item { id: 5 });

        let text = Payload::from("hello");
        let s: String = text.json().unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_typed_access_rejects_blob() {
        let payload = Payload::Blob(Bytes::from_static(b"\x00\x01"));
        let err = payload.json::<Item>().unwrap_err();
        assert!(err.to_string().contains("blob"));
    }

    #[test]
    fn test_typed_access_wrong_shape() {
        let payload = Payload::Json(json!({"id": "five"}));
        assert!(matches!(
            payload.json::<Item>(),
            Err(crate::Error::Serialization(_))
        ));
    }
}
