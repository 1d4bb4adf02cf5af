//! 结果包装器：将任意 HTTP 调用的 future 统一为 (error, data, status) 三元组。
//!
//! Result wrapper.
//!
//! [`safe_await`] awaits a client future and always resolves to a
//! [`SafeAwaitResult`], except when a native fault shows up on either path;
//! that fault is returned as `Err(Error::Native)`.
//!
//! ```rust
//! use safe_await::{safe_await, HttpResponse, Rejection};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let call = async { Ok::<_, Rejection>(HttpResponse::new(json!({"id": 5}), 200)) };
//! let (error, data, status) = safe_await(call, None).await?.into_parts();
//! assert!(error.is_none());
//! assert_eq!(status, 200);
//! assert_eq!(data.unwrap().as_json(), Some(&json!({"id": 5})));
//! # Ok::<(), safe_await::Error>(())
//! # }).unwrap();
//! ```

pub mod builder;
pub mod factory;
pub mod result;

pub use builder::SafeAwait;
pub use factory::{create_safe_await, NormalizingSafeAwait};
pub use result::SafeAwaitResult;

use std::future::Future;
use tracing::debug;

use crate::config::Config;
use crate::guard;
use crate::normalize::{normalize_error, normalize_response};
use crate::types::{HttpError, Payload, RawResponse, Rejection};
use crate::Result;

/// Cleanup callback run once the wrapped call settles.
pub type Finally = Box<dyn FnOnce() + Send>;

/// Await `future` and normalize its outcome with the default [`Config`].
pub async fn safe_await<Fut, R, E>(future: Fut, finally: Option<Finally>) -> Result<SafeAwaitResult>
where
    Fut: Future<Output = std::result::Result<R, E>>,
    R: Into<RawResponse>,
    E: Into<Rejection>,
{
    settle(future, &Config::default(), finally).await
}

pub(crate) async fn settle<Fut, R, E>(
    future: Fut,
    config: &Config,
    finally: Option<Finally>,
) -> Result<SafeAwaitResult>
where
    Fut: Future<Output = std::result::Result<R, E>>,
    R: Into<RawResponse>,
    E: Into<Rejection>,
{
    let outcome = match future.await {
        Ok(resolved) => on_fulfilled(resolved.into(), config),
        Err(reason) => on_rejected(reason.into(), config),
    };
    if let Some(cleanup) = finally {
        cleanup();
    }
    outcome
}

fn on_fulfilled(raw: RawResponse, config: &Config) -> Result<SafeAwaitResult> {
    let normalized = normalize_response(raw, config);
    let status = normalized.status;
    match normalized.data {
        Payload::Fault(fault) => {
            guard::check_fault(&fault)?;
            debug!(status, "resolved value carried a fault");
            Ok(SafeAwaitResult::failure(HttpError::from(fault), None, status))
        }
        data => Ok(SafeAwaitResult::success(data, status)),
    }
}

fn on_rejected(rejection: Rejection, config: &Config) -> Result<SafeAwaitResult> {
    let error = normalize_error(rejection);
    guard::check_error(&error)?;

    let status = error
        .status
        .filter(|s| *s != 0)
        .or(error.status_code.filter(|s| *s != 0))
        .unwrap_or(config.default_error_status);

    let data = error.response.as_ref().and_then(|r| r.data.clone());
    if let Some(d) = &data {
        guard::check_payload(d)?;
    }
    debug!(status, name = %error.name, "captured failure");
    Ok(SafeAwaitResult::failure(error, data, status))
}
