//! Response shapes: the canonical [`HttpResponse`] and the per-client inputs
//! folded into [`RawResponse`].

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde_json::{Map, Value};
use tracing::debug;

use super::payload::Payload;
use crate::utils::{headers_from_json, headers_to_json};

/// Canonical response record, regardless of the originating client.
///
/// This is also the native shape of envelope-style clients, whose responses
/// already carry `data` and `status` side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub data: Payload,
    pub status: u16,
    pub status_text: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl HttpResponse {
    pub fn new(data: impl Into<Payload>, status: u16) -> Self {
        Self {
            data: data.into(),
            status,
            status_text: None,
            headers: None,
        }
    }

    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Buffered fetch-style response: status line, headers and the raw body,
/// plus the parsed body once the fetch adapter has attached it.
///
/// Fetch-style clients do not fail on non-2xx statuses; promoting those to
/// errors is the fetch adapter's job.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub data: Option<Payload>,
}

impl Default for FetchResponse {
    fn default() -> Self {
        Self {
            status: 200,
            status_text: String::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            data: None,
        }
    }
}

impl FetchResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = text.into();
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<Payload>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// `true` for 2xx statuses.
    #[inline]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Copy of this response without any attached parsed data.
    pub fn unparsed(&self) -> Self {
        Self {
            data: None,
            ..self.clone()
        }
    }
}

/// Lean-style response: `{statusCode, headers, body}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeanResponse {
    pub status_code: u16,
    pub headers: Option<HeaderMap>,
    pub body: Option<Payload>,
    pub data: Option<Payload>,
    /// Remaining fields of a dynamically classified value
    pub extra: Map<String, Value>,
}

impl LeanResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: None,
            body: None,
            data: None,
            extra: Map::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Payload>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<Payload>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// The whole response rendered as JSON, used when it carries neither
    /// `body` nor `data`.
    pub fn to_json(&self) -> Value {
        let mut obj = self.extra.clone();
        obj.insert("statusCode".into(), Value::from(self.status_code));
        if let Some(h) = &self.headers {
            obj.insert("headers".into(), headers_to_json(h));
        }
        Value::Object(obj)
    }
}

/// A resolved value, tagged by the client convention that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Already canonical (`data` + `status`)
    Envelope(HttpResponse),
    /// Fetch-style response object
    Fetch(FetchResponse),
    /// Lean-style response (`statusCode`)
    Lean(LeanResponse),
    /// No status information; the whole value is the payload
    Raw(Payload),
}

impl RawResponse {
    /// Classify a dynamic value by its shape.
    ///
    /// Order: `data` + numeric `status` → envelope; numeric `statusCode` →
    /// lean; anything else → raw. Fetch responses are live objects and are
    /// never produced from JSON.
    pub fn classify(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                debug!(kind = "raw", "classified resolved value");
                return RawResponse::Raw(Payload::Json(other));
            }
        };

        if obj.contains_key("data") {
            if let Some(status) = status_field(&obj, "status") {
                debug!(kind = "envelope", status, "classified resolved value");
                let data = obj.remove("data").unwrap_or(Value::Null);
                return RawResponse::Envelope(HttpResponse {
                    data: Payload::Json(data),
                    status,
                    status_text: obj
                        .get("statusText")
                        .and_then(|v| v.as_str())
                        .map(String::from),
                    headers: obj.get("headers").and_then(headers_from_json),
                });
            }
        }

        if let Some(status_code) = status_field(&obj, "statusCode") {
            debug!(kind = "lean", status_code, "classified resolved value");
            obj.remove("statusCode");
            let headers = obj.remove("headers").and_then(|h| headers_from_json(&h));
            let body = take_present(&mut obj, "body").map(Payload::Json);
            let data = take_present(&mut obj, "data").map(Payload::Json);
            return RawResponse::Lean(LeanResponse {
                status_code,
                headers,
                body,
                data,
                extra: obj,
            });
        }

        debug!(kind = "raw", "classified resolved value");
        RawResponse::Raw(Payload::Json(Value::Object(obj)))
    }
}

/// HTTP status stored under `key` as a number or a numeric string, if it
/// fits a `u16`.
pub(crate) fn status_field(obj: &Map<String, Value>, key: &str) -> Option<u16> {
    match obj.get(key)? {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Remove `key`, treating JSON `null` as absent.
pub(crate) fn take_present(obj: &mut Map<String, Value>, key: &str) -> Option<Value> {
    obj.remove(key).filter(|v| !v.is_null())
}

impl From<HttpResponse> for RawResponse {
    fn from(r: HttpResponse) -> Self {
        RawResponse::Envelope(r)
    }
}

impl From<FetchResponse> for RawResponse {
    fn from(r: FetchResponse) -> Self {
        RawResponse::Fetch(r)
    }
}

impl From<LeanResponse> for RawResponse {
    fn from(r: LeanResponse) -> Self {
        RawResponse::Lean(r)
    }
}

impl From<Payload> for RawResponse {
    fn from(p: Payload) -> Self {
        RawResponse::Raw(p)
    }
}

impl From<Value> for RawResponse {
    fn from(v: Value) -> Self {
        RawResponse::classify(v)
    }
}

impl From<String> for RawResponse {
    fn from(s: String) -> Self {
        RawResponse::Raw(Payload::Text(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_envelope() {
        let raw = RawResponse::classify(json!({
            "data": {"id": 5},
            "status": 201,
            "statusText": "Created",
            "headers": {"x-id": "5"}
        }));
        match raw {
            RawResponse::Envelope(r) => {
                assert_eq!(r.data, Payload::Json(json!({"id": 5})));
                assert_eq!(r.status, 201);
                assert_eq!(r.status_text.as_deref(), Some("Created"));
                assert_eq!(r.headers.unwrap().get("x-id").unwrap(), "5");
            }
            other => panic!("Expected Envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_envelope_wins_over_status_code() {
        let raw = RawResponse::classify(json!({"data": 1, "status": 200, "statusCode": 404}));
        assert!(matches!(raw, RawResponse::Envelope(_)));
    }

    #[test]
    fn test_classify_envelope_with_numeric_string_status() {
        match RawResponse::classify(json!({"data": 1, "status": "201"})) {
            RawResponse::Envelope(r) => assert_eq!(r.status, 201),
            other => panic!("Expected Envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_lean() {
        let raw = RawResponse::classify(json!({
            "statusCode": 200,
            "body": {"ok": true},
            "trailers": {}
        }));
        match raw {
            RawResponse::Lean(r) => {
                assert_eq!(r.status_code, 200);
                assert_eq!(r.body, Some(Payload::Json(json!({"ok": true}))));
                assert!(r.data.is_none());
                assert!(r.extra.contains_key("trailers"));
            }
            other => panic!("Expected Lean, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_raw() {
        assert!(matches!(
            RawResponse::classify(json!([1, 2, 3])),
            RawResponse::Raw(Payload::Json(_))
        ));
        // data without a status is not an envelope
        assert!(matches!(
            RawResponse::classify(json!({"data": 1})),
            RawResponse::Raw(_)
        ));
        // non-numeric status is not a status
        assert!(matches!(
            RawResponse::classify(json!({"data": 1, "status": "ok"})),
            RawResponse::Raw(_)
        ));
    }

    #[test]
    fn test_fetch_response_defaults() {
        let r = FetchResponse::default();
        assert_eq!(r.status, 200);
        assert!(r.ok());
        assert!(!FetchResponse::new(404).ok());
    }

    #[test]
    fn test_lean_to_json() {
        let mut headers = HeaderMap::new();
        headers.insert("x-a", "1".parse().unwrap());
        let r = LeanResponse::new(204).with_headers(headers);
        assert_eq!(r.to_json(), json!({"statusCode": 204, "headers": {"x-a": "1"}}));
    }
}
