use std::future::Future;

use crate::types::{LeanResponse, Rejection};
use crate::wrapper::{safe_await, Finally, SafeAwaitResult};
use crate::Result;

/// Wrap a lean-style client future (`{statusCode, headers, body}`).
pub async fn safe_await_lean<Fut, E>(future: Fut, finally: Option<Finally>) -> Result<SafeAwaitResult>
where
    Fut: Future<Output = std::result::Result<LeanResponse, E>>,
    E: Into<Rejection>,
{
    safe_await(future, finally).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Payload;
    use serde_json::json;

    #[tokio::test]
    async fn test_body_is_payload() {
        let r = safe_await_lean(
            async { Ok::<_, Rejection>(LeanResponse::new(200).with_body(json!({"rows": []}))) },
            None,
        )
        .await
        .unwrap();
        assert_eq!(r.status, 200);
        assert_eq!(r.data, Some(Payload::Json(json!({"rows": []}))));
    }
}
