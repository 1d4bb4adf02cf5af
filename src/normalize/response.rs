use crate::config::Config;
use crate::types::{HttpResponse, Payload, RawResponse};

/// Map a resolved value to the canonical response record.
pub fn normalize_response(raw: RawResponse, config: &Config) -> HttpResponse {
    match raw {
        RawResponse::Envelope(r) => r,
        RawResponse::Fetch(mut r) => match r.data.take() {
            Some(data) => HttpResponse {
                data,
                status: r.status,
                status_text: Some(r.status_text),
                headers: Some(r.headers),
            },
            None => HttpResponse {
                status: r.status,
                status_text: Some(r.status_text.clone()),
                headers: Some(r.headers.clone()),
                data: Payload::Response(Box::new(r)),
            },
        },
        RawResponse::Lean(mut r) => {
            let status = r.status_code;
            let data = match (r.body.take(), r.data.take()) {
                (Some(body), _) => body,
                (None, Some(data)) => data,
                (None, None) => Payload::Json(r.to_json()),
            };
            HttpResponse {
                data,
                status,
                status_text: None,
                headers: r.headers,
            }
        }
        RawResponse::Raw(data) => HttpResponse {
            data,
            status: config.raw_success_status,
            status_text: None,
            headers: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FetchResponse, LeanResponse};
    use serde_json::json;

    #[test]
    fn test_envelope_copied_through() {
        let r = HttpResponse::new(json!({"id": 5}), 200).with_status_text("OK");
        let n = normalize_response(RawResponse::Envelope(r.clone()), &Config::default());
        assert_eq!(n, r);
    }

    #[test]
    fn test_fetch_with_attached_data() {
        let r = FetchResponse::new(201)
            .with_status_text("Created")
            .with_data(json!({"ok": true}));
        let n = normalize_response(r.into(), &Config::default());
        assert_eq!(n.status, 201);
        assert_eq!(n.status_text.as_deref(), Some("Created"));
        assert_eq!(n.data, Payload::Json(json!({"ok": true})));
    }

    #[test]
    fn test_fetch_without_data_is_its_own_payload() {
        let r = FetchResponse::default().with_body("raw");
        let n = normalize_response(r.clone().into(), &Config::default());
        assert_eq!(n.status, 200);
        assert_eq!(n.data, Payload::Response(Box::new(r)));
    }

    #[test]
    fn test_lean_prefers_body_then_data() {
        let both = LeanResponse::new(200).with_body("b").with_data("d");
        assert_eq!(
            normalize_response(both.into(), &Config::default()).data,
            Payload::from("b")
        );

        let data_only = LeanResponse::new(202).with_data("d");
        let n = normalize_response(data_only.into(), &Config::default());
        assert_eq!(n.data, Payload::from("d"));
        assert_eq!(n.status, 202);
    }

    #[test]
    fn test_lean_without_body_or_data_uses_whole_value() {
        let n = normalize_response(
            RawResponse::classify(json!({"statusCode": 204, "trailers": {}})),
            &Config::default(),
        );
        assert_eq!(n.status, 204);
        assert_eq!(n.data, Payload::Json(json!({"statusCode": 204, "trailers": {}})));
    }

    #[test]
    fn test_raw_forced_success_status() {
        let n = normalize_response(RawResponse::classify(json!([1, 2])), &Config::default());
        assert_eq!(n.status, 200);
        assert_eq!(n.data, Payload::Json(json!([1, 2])));

        let config = Config::default().with_raw_success_status(204);
        let n = normalize_response(RawResponse::Raw(Payload::from("x")), &config);
        assert_eq!(n.status, 204);
    }
}
