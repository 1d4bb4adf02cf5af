//! Per-client adapters.
//!
//! | Adapter | Input future resolves to |
//! |---------|--------------------------|
//! | [`safe_await_envelope`] | [`crate::HttpResponse`] |
//! | [`safe_await_fetch`] | `reqwest::Response` |
//! | [`safe_await_lean`] | [`crate::LeanResponse`] |

pub mod envelope;
pub mod fetch;
pub mod lean;

pub use envelope::safe_await_envelope;
pub use fetch::{prepare_fetch_response, read_fetch_response, safe_await_fetch};
pub use lean::safe_await_lean;
