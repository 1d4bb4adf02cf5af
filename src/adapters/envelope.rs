use std::future::Future;

use crate::types::{HttpResponse, Rejection};
use crate::wrapper::{safe_await, Finally, SafeAwaitResult};
use crate::Result;

/// Wrap an envelope-style client future. Its responses are already canonical.
pub async fn safe_await_envelope<Fut, E>(future: Fut, finally: Option<Finally>) -> Result<SafeAwaitResult>
where
    Fut: Future<Output = std::result::Result<HttpResponse, E>>,
    E: Into<Rejection>,
{
    safe_await(future, finally).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClientError, Payload};
    use serde_json::json;

    #[tokio::test]
    async fn test_client_error_with_response() {
        let err = ClientError::new("Request failed with status code 401")
            .with_response(HttpResponse::new(json!({"error": "unauthorized"}), 401))
            .with_config(json!({"url": "/me"}));
        let r = safe_await_envelope(async { Err::<HttpResponse, _>(err) }, None)
            .await
            .unwrap();
        assert_eq!(r.status, 401);
        assert_eq!(r.data, Some(Payload::Json(json!({"error": "unauthorized"}))));
        assert_eq!(r.error.unwrap().message, "Request failed with status code 401");
    }
}
