//! Error shapes: the canonical [`HttpError`] and the per-client failures
//! folded into [`Rejection`].

use reqwest::header::HeaderMap;
use serde_json::{Map, Value};
use std::convert::Infallible;
use tracing::debug;

use super::fault::{Fault, FaultKind};
use super::payload::Payload;
use super::response::{status_field, take_present, FetchResponse, HttpResponse};
use crate::utils::headers_from_json;

/// Marker field set by envelope-style clients on their serialized errors.
pub const CLIENT_ERROR_MARKER: &str = "isAxiosError";

/// Canonical `response` sub-record of an [`HttpError`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorResponse {
    pub data: Option<Payload>,
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl From<HttpResponse> for ErrorResponse {
    fn from(r: HttpResponse) -> Self {
        Self {
            data: Some(r.data),
            status: Some(r.status),
            status_text: r.status_text,
            headers: r.headers,
        }
    }
}

/// Normalized error record.
///
/// `kind` is set when the error is itself a runtime exception; `extra`
/// keeps any fields copied through from the original value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{name}: {message}")]
pub struct HttpError {
    pub name: String,
    pub message: String,
    pub kind: Option<FaultKind>,
    pub response: Option<ErrorResponse>,
    pub status: Option<u16>,
    pub status_code: Option<u16>,
    pub extra: Map<String, Value>,
}

impl HttpError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: None,
            response: None,
            status: None,
            status_code: None,
            extra: Map::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_response(mut self, response: ErrorResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The fault this error represents, if it is a runtime exception.
    pub fn fault(&self) -> Option<Fault> {
        self.kind.map(|kind| Fault::new(kind, self.message.clone()))
    }

    /// Build a passthrough error from a dynamic value of unknown shape.
    fn from_json(mut obj: Map<String, Value>) -> Self {
        let (name, message) = take_name_message(&mut obj);
        let status = status_field(&obj, "status");
        obj.remove("status");
        let status_code = status_field(&obj, "statusCode");
        if status_code.is_some() {
            obj.remove("statusCode");
        }
        let response = obj
            .remove("response")
            .and_then(|r| r.as_object().cloned())
            .map(error_response_from_json);
        Self {
            name,
            message,
            kind: None,
            response,
            status,
            status_code,
            extra: obj,
        }
    }
}

impl From<Fault> for HttpError {
    fn from(f: Fault) -> Self {
        Self {
            kind: Some(f.kind),
            ..Self::new(f.kind.name(), f.message)
        }
    }
}

/// Failure from an envelope-style client: carries the failing response and
/// the request configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientError {
    pub name: String,
    pub message: String,
    pub response: Option<ErrorResponse>,
    pub status: Option<u16>,
    pub status_code: Option<u16>,
    pub config: Option<Value>,
    pub extra: Map<String, Value>,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "ClientError".into(),
            message: message.into(),
            response: None,
            status: None,
            status_code: None,
            config: None,
            extra: Map::new(),
        }
    }

    pub fn with_response(mut self, response: impl Into<ErrorResponse>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

/// Failure from a lean-style client: `{statusCode, headers, body}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeanError {
    pub name: String,
    pub message: String,
    pub status_code: u16,
    pub headers: Option<HeaderMap>,
    pub body: Option<Payload>,
    pub data: Option<Payload>,
    pub extra: Map<String, Value>,
}

impl LeanError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            name: "ResponseStatusCodeError".into(),
            message: message.into(),
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
}

/// A failure reason, tagged by the client convention that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Envelope-style client error
    Client(ClientError),
    /// A fetch-style response used as the failure itself
    Fetch(FetchResponse),
    /// Lean-style error (`statusCode`)
    Lean(LeanError),
    /// Already in a recognizable error shape
    Error(HttpError),
    /// A runtime exception
    Fault(Fault),
}

impl Rejection {
    /// Classify a dynamic failure value by its shape.
    ///
    /// Order: client-error marker, or both `response` and `config` → client;
    /// numeric `statusCode` → lean; anything else passes through as an
    /// [`HttpError`]. Dynamic values never classify as faults: fault kinds are
    /// only carried by typed values.
    pub fn classify(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                debug!(kind = "error", "classified rejection");
                let message = match other {
                    Value::String(s) => s,
                    v => v.to_string(),
                };
                return Rejection::Error(HttpError::new("Error", message));
            }
        };

        let marked = obj
            .get(CLIENT_ERROR_MARKER)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let has = |k: &str| obj.get(k).map(|v| !v.is_null()).unwrap_or(false);
        if marked || (has("response") && has("config")) {
            debug!(kind = "client", "classified rejection");
            let (name, message) = take_name_message(&mut obj);
            let status = status_field(&obj, "status");
            obj.remove("status");
            let status_code = status_field(&obj, "statusCode");
            if status_code.is_some() {
                obj.remove("statusCode");
            }
            let response = obj
                .remove("response")
                .and_then(|r| r.as_object().cloned())
                .map(error_response_from_json);
            let config = take_present(&mut obj, "config");
            return Rejection::Client(ClientError {
                name,
                message,
                response,
                status,
                status_code,
                config,
                extra: obj,
            });
        }

        if let Some(status_code) = status_field(&obj, "statusCode") {
            debug!(kind = "lean", status_code, "classified rejection");
            obj.remove("statusCode");
            let (name, message) = take_name_message(&mut obj);
            let headers = obj.remove("headers").and_then(|h| headers_from_json(&h));
            let body = take_present(&mut obj, "body").map(Payload::Json);
            let data = take_present(&mut obj, "data").map(Payload::Json);
            return Rejection::Lean(LeanError {
                name,
                message,
                status_code,
                headers,
                body,
                data,
                extra: obj,
            });
        }

        debug!(kind = "error", "classified rejection");
        Rejection::Error(HttpError::from_json(obj))
    }
}

fn take_name_message(obj: &mut Map<String, Value>) -> (String, String) {
    let name = match obj.remove("name") {
        Some(Value::String(s)) => s,
        _ => "Error".to_string(),
    };
    let message = match obj.remove("message") {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };
    (name, message)
}

fn error_response_from_json(obj: Map<String, Value>) -> ErrorResponse {
    ErrorResponse {
        status: status_field(&obj, "status"),
        status_text: obj
            .get("statusText")
            .and_then(|v| v.as_str())
            .map(String::from),
        headers: obj.get("headers").and_then(headers_from_json),
        data: obj.get("data").cloned().map(Payload::Json),
    }
}

impl From<ClientError> for Rejection {
    fn from(e: ClientError) -> Self {
        Rejection::Client(e)
    }
}

impl From<FetchResponse> for Rejection {
    fn from(r: FetchResponse) -> Self {
        Rejection::Fetch(r)
    }
}

impl From<LeanError> for Rejection {
    fn from(e: LeanError) -> Self {
        Rejection::Lean(e)
    }
}

impl From<HttpError> for Rejection {
    fn from(e: HttpError) -> Self {
        Rejection::Error(e)
    }
}

impl From<Fault> for Rejection {
    fn from(f: Fault) -> Self {
        Rejection::Fault(f)
    }
}

impl From<Value> for Rejection {
    fn from(v: Value) -> Self {
        Rejection::classify(v)
    }
}

impl From<Infallible> for Rejection {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

impl From<reqwest::Error> for Rejection {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_decode() {
            "decode"
        } else if err.is_status() {
            "status"
        } else {
            "request"
        };
        let mut error = HttpError::new("RequestError", err.to_string())
            .with_field("cause", Value::String(cause.to_string()));
        if let Some(url) = err.url() {
            error = error.with_field("url", Value::String(url.to_string()));
        }
        if let Some(status) = err.status() {
            error = error.with_status(status.as_u16());
        }
        Rejection::Error(error)
    }
}
