//! # safe-await
//!
//! 统一的 HTTP 调用结果：无论底层客户端如何表示响应与错误，都得到 (error, data, status) 三元组。
//!
//! Uniform `(error, data, status)` results for async HTTP calls.
//!
//! ## Overview
//!
//! HTTP clients disagree on what a response and a failure look like. Some
//! return an envelope with `data` and `status`, some return a live response
//! that must be read and never fail on non-2xx, some return a lean
//! `{statusCode, body}` record. This crate awaits any of them and resolves to
//! one [`SafeAwaitResult`], so callers check a field instead of matching on
//! each client's error type.
//!
//! HTTP failures are always captured into the result. Programming-bug class
//! faults (type, range, syntax, ... see [`FaultKind::NATIVE`]) are not: they
//! come back as `Err(Error::Native)` and propagate with `?`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safe_await::adapters::safe_await_fetch;
//!
//! #[tokio::main]
//! async fn main() -> safe_await::Result<()> {
//!     let client = reqwest::Client::new();
//!     let (error, data, status) =
//!         safe_await_fetch(client.get("https://example.com/users/5").send(), None)
//!             .await?
//!             .into_parts();
//!
//!     match error {
//!         Some(e) => eprintln!("request failed ({}): {}", status, e),
//!         None => println!("got {:?}", data),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Response, error, payload and fault types |
//! | [`normalize`] | Response and error normalizers |
//! | [`guard`] | Native-fault guard |
//! | [`wrapper`] | [`safe_await`], [`SafeAwait`] builder, normalizer factory |
//! | [`adapters`] | Per-client adapters (envelope, fetch via `reqwest`, lean) |
//! | [`config`] | Default statuses, env overrides |

pub mod adapters;
pub mod config;
pub mod guard;
pub mod normalize;
pub mod types;
pub mod utils;
pub mod wrapper;

// Re-export main types for convenience
pub use adapters::{safe_await_envelope, safe_await_fetch, safe_await_lean};
pub use config::Config;
pub use normalize::{normalize_error, normalize_response};
pub use types::{
    ClientError, ErrorResponse, Fault, FaultKind, FetchResponse, HttpError, HttpResponse,
    LeanError, LeanResponse, Payload, RawResponse, Rejection,
};
pub use wrapper::{
    create_safe_await, safe_await, Finally, NormalizingSafeAwait, SafeAwait, SafeAwaitResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
