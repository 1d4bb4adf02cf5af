use crate::types::{ErrorResponse, HttpError, Rejection};

/// Map a failure reason to the canonical error record.
pub fn normalize_error(rejection: Rejection) -> HttpError {
    match rejection {
        Rejection::Client(e) => {
            let status = e
                .response
                .as_ref()
                .and_then(|r| r.status)
                .filter(|s| *s != 0)
                .or(e.status);
            let mut extra = e.extra;
            if let Some(config) = e.config {
                extra.insert("config".into(), config);
            }
            HttpError {
                name: e.name,
                message: e.message,
                kind: None,
                response: e.response,
                status,
                status_code: e.status_code,
                extra,
            }
        }
        Rejection::Fetch(r) => HttpError {
            name: "FetchError".into(),
            message: format!("HTTP Error: {} {}", r.status, r.status_text),
            kind: None,
            status: Some(r.status),
            status_code: None,
            response: Some(ErrorResponse {
                data: r.data,
                status: Some(r.status),
                status_text: Some(r.status_text),
                headers: Some(r.headers),
            }),
            extra: Default::default(),
        },
        Rejection::Lean(e) => HttpError {
            name: e.name,
            message: e.message,
            kind: None,
            status: Some(e.status_code),
            status_code: Some(e.status_code),
            response: Some(ErrorResponse {
                data: e.body.or(e.data),
                status: Some(e.status_code),
                status_text: None,
                headers: e.headers,
            }),
            extra: e.extra,
        },
        Rejection::Error(e) => e,
        Rejection::Fault(f) => HttpError::from(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ClientError, Fault, FaultKind, FetchResponse, HttpResponse, LeanError, Payload,
    };
    use serde_json::json;

    #[test]
    fn test_client_error_status_from_response() {
        let e = ClientError::new("Request failed")
            .with_status(400)
            .with_response(HttpResponse::new(json!({"e": 1}), 422).with_status_text("Unprocessable"))
            .with_config(json!({"method": "post"}));
        let n = normalize_error(e.into());
        assert_eq!(n.status, Some(422));
        let r = n.response.unwrap();
        assert_eq!(r.data, Some(Payload::Json(json!({"e": 1}))));
        assert_eq!(r.status_text.as_deref(), Some("Unprocessable"));
        assert_eq!(n.extra.get("config"), Some(&json!({"method": "post"})));
    }

    #[test]
    fn test_client_error_without_response_keeps_own_status() {
        let n = normalize_error(ClientError::new("Network Error").with_status(502).into());
        assert_eq!(n.status, Some(502));
        assert!(n.response.is_none());
    }

    #[test]
    fn test_client_error_without_any_status() {
        let n = normalize_error(ClientError::new("Network Error").into());
        assert!(n.status.is_none());
        assert!(n.status_code.is_none());

        let n = normalize_error(ClientError::new("Not Found").with_status_code(404).into());
        assert!(n.status.is_none());
        assert_eq!(n.status_code, Some(404));
    }

    #[test]
    fn test_fetch_response_thrown() {
        let r = FetchResponse::new(500).with_status_text("Server Error");
        let n = normalize_error(r.into());
        assert_eq!(n.name, "FetchError");
        assert_eq!(n.message, "HTTP Error: 500 Server Error");
        assert_eq!(n.status, Some(500));
        let resp = n.response.unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.status, Some(500));
    }

    #[test]
    fn test_lean_error_body_then_data() {
        let n = normalize_error(
            LeanError::new(404, "Not Found")
                .with_body(json!({"msg": "not found"}))
                .with_data(json!("ignored"))
                .into(),
        );
        assert_eq!(n.status, Some(404));
        assert_eq!(n.status_code, Some(404));
        assert_eq!(
            n.response.unwrap().data,
            Some(Payload::Json(json!({"msg": "not found"})))
        );

        let n = normalize_error(LeanError::new(410, "Gone").with_data("gone").into());
        assert_eq!(n.response.unwrap().data, Some(Payload::from("gone")));
    }

    #[test]
    fn test_passthrough_unchanged() {
        let e = HttpError::new("Error", "weird").with_field("code", json!("E_WEIRD"));
        assert_eq!(normalize_error(e.clone().into()), e);
    }

    #[test]
    fn test_fault_keeps_kind() {
        let n = normalize_error(Fault::type_error("bad").into());
        assert_eq!(n.kind, Some(FaultKind::Type));
        assert!(n.status.is_none());
    }
}
