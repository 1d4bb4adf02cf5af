use std::fmt;
use std::future::Future;

use super::{settle, Finally, SafeAwaitResult};
use crate::adapters::fetch::prepare_reqwest;
use crate::config::Config;
use crate::types::{HttpResponse, LeanResponse, RawResponse, Rejection};
use crate::Result;

/// Builder for a single wrapped call with a custom [`Config`] and an
/// optional cleanup callback.
///
/// ```rust,no_run
/// use safe_await::SafeAwait;
///
/// # async fn run() -> safe_await::Result<()> {
/// let client = reqwest::Client::new();
/// let result = SafeAwait::from_env()
///     .finally(|| tracing::info!("request settled"))
///     .fetch(client.get("https://example.com/items/5").send())
///     .await?;
/// if let Some(error) = result.error {
///     eprintln!("failed with {}: {}", result.status, error);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SafeAwait {
    config: Config,
    finally: Option<Finally>,
}

impl SafeAwait {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            finally: None,
        }
    }

    /// Start from [`Config::from_env`].
    pub fn from_env() -> Self {
        Self {
            config: Config::from_env(),
            finally: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Run `cleanup` exactly once after the call settles.
    pub fn finally(mut self, cleanup: impl FnOnce() + Send + 'static) -> Self {
        self.finally = Some(Box::new(cleanup));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wrap a future of any supported convention.
    pub async fn run<Fut, R, E>(self, future: Fut) -> Result<SafeAwaitResult>
    where
        Fut: Future<Output = std::result::Result<R, E>>,
        R: Into<RawResponse>,
        E: Into<Rejection>,
    {
        settle(future, &self.config, self.finally).await
    }

    /// Wrap an envelope-style client future.
    pub async fn envelope<Fut, E>(self, future: Fut) -> Result<SafeAwaitResult>
    where
        Fut: Future<Output = std::result::Result<HttpResponse, E>>,
        E: Into<Rejection>,
    {
        self.run(future).await
    }

    /// Wrap a lean-style client future.
    pub async fn lean<Fut, E>(self, future: Fut) -> Result<SafeAwaitResult>
    where
        Fut: Future<Output = std::result::Result<LeanResponse, E>>,
        E: Into<Rejection>,
    {
        self.run(future).await
    }

    /// Wrap a `reqwest` send future, parsing the body and promoting non-2xx
    /// statuses to errors.
    pub async fn fetch<Fut>(self, future: Fut) -> Result<SafeAwaitResult>
    where
        Fut: Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
    {
        self.run(prepare_reqwest(future)).await
    }
}

impl Default for SafeAwait {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SafeAwait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeAwait")
            .field("config", &self.config)
            .field("finally", &self.finally.is_some())
            .finish()
    }
}
