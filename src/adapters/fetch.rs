//! Fetch-style adapter over `reqwest`.
//!
//! Like fetch, `reqwest` resolves non-2xx responses successfully and leaves
//! the body unread. This adapter reads the body once, parses it according to
//! its content type, and promotes non-2xx statuses to errors before the
//! shared wrapper sees the outcome.

use bytes::Bytes;
use std::future::Future;
use tracing::debug;

use crate::types::{ErrorResponse, FetchResponse, HttpError, Payload, Rejection};
use crate::wrapper::{safe_await, Finally, SafeAwaitResult};
use crate::Result;

/// Wrap a `reqwest` send future.
pub async fn safe_await_fetch<Fut>(future: Fut, finally: Option<Finally>) -> Result<SafeAwaitResult>
where
    Fut: Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
{
    safe_await(prepare_reqwest(future), finally).await
}

/// Chain the fetch preprocessing onto a `reqwest` send future.
pub(crate) async fn prepare_reqwest<Fut>(
    future: Fut,
) -> std::result::Result<FetchResponse, Rejection>
where
    Fut: Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
{
    let response = future.await?;
    read_fetch_response(response).await
}

/// Buffer a live response and run the fetch preprocessing on it.
pub async fn read_fetch_response(
    response: reqwest::Response,
) -> std::result::Result<FetchResponse, Rejection> {
    let status = response.status();
    let snapshot = FetchResponse::new(status.as_u16())
        .with_status_text(status.canonical_reason().unwrap_or_default())
        .with_headers(response.headers().clone());

    match response.bytes().await {
        Ok(body) => prepare_fetch_response(snapshot.with_body(body)),
        Err(e) => {
            debug!(error = %e, "failed to read response body, using the unparsed response");
            let data = Payload::Response(Box::new(snapshot.clone()));
            settle_status(snapshot, data)
        }
    }
}

/// Parse a buffered response's body and promote non-2xx statuses to errors.
///
/// On success the parsed body is attached as `data`. On failure the error
/// carries the parsed body in its response.
pub fn prepare_fetch_response(
    response: FetchResponse,
) -> std::result::Result<FetchResponse, Rejection> {
    let data = response.parse_body();
    settle_status(response, data)
}

fn settle_status(
    response: FetchResponse,
    data: Payload,
) -> std::result::Result<FetchResponse, Rejection> {
    if !response.ok() {
        let error = HttpError::new(
            "Error",
            format!("HTTP Error: {} {}", response.status, response.status_text),
        )
        .with_status(response.status)
        .with_response(ErrorResponse {
            data: Some(data),
            status: Some(response.status),
            status_text: Some(response.status_text),
            headers: Some(response.headers),
        });
        return Err(Rejection::Error(error));
    }
    Ok(response.with_data(data))
}

impl FetchResponse {
    /// Parse the body by content type: JSON for `application/json`, text
    /// for `text/*`, otherwise an opaque blob. A body that fails to parse
    /// yields the unparsed response itself.
    pub fn parse_body(&self) -> Payload {
        let content_type = self.content_type().unwrap_or_default();
        if content_type.contains("application/json") {
            match serde_json::from_slice(&self.body) {
                Ok(v) => Payload::Json(v),
                Err(e) => {
                    debug!(error = %e, status = self.status, "JSON body did not parse, using the unparsed response");
                    Payload::Response(Box::new(self.unparsed()))
                }
            }
        } else if content_type.contains("text/") {
            Payload::Text(String::from_utf8_lossy(&self.body).into_owned())
        } else {
            Payload::Blob(Bytes::clone(&self.body))
        }
    }
}
