//! Wrappers specialized with a caller-supplied response normalizer.

use futures::TryFutureExt;
use std::future::Future;
use std::marker::PhantomData;

use super::{settle, Finally, SafeAwaitResult};
use crate::config::Config;
use crate::types::{HttpResponse, Rejection};
use crate::Result;

/// A wrapper that maps every resolved `R` to the canonical response with its
/// normalizer before the shared normalization runs. Rejections are untouched.
pub struct NormalizingSafeAwait<R, N> {
    normalizer: N,
    config: Config,
    _response: PhantomData<fn(R)>,
}

/// Build a wrapper for a client whose responses need custom normalization.
///
/// ```rust
/// use safe_await::{create_safe_await, HttpResponse, Rejection};
///
/// struct Reply { code: u16, text: String }
///
/// let wrapper = create_safe_await(|r: Reply| HttpResponse::new(r.text, r.code));
/// # tokio_test::block_on(async {
/// let result = wrapper
///     .call(async { Ok::<_, Rejection>(Reply { code: 202, text: "queued".into() }) }, None)
///     .await
///     .unwrap();
/// assert_eq!(result.status, 202);
/// # });
/// ```
pub fn create_safe_await<R, N>(normalizer: N) -> NormalizingSafeAwait<R, N>
where
    N: Fn(R) -> HttpResponse,
{
    NormalizingSafeAwait {
        normalizer,
        config: Config::default(),
        _response: PhantomData,
    }
}

impl<R, N> NormalizingSafeAwait<R, N>
where
    N: Fn(R) -> HttpResponse,
{
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub async fn call<Fut, E>(&self, future: Fut, finally: Option<Finally>) -> Result<SafeAwaitResult>
    where
        Fut: Future<Output = std::result::Result<R, E>>,
        E: Into<Rejection>,
    {
        let normalized = future.map_ok(|resolved| (self.normalizer)(resolved));
        settle(normalized, &self.config, finally).await
    }
}
