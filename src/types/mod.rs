//! 类型模块：响应、错误与载荷的强类型表示。
//!
//! # Types Module
//!
//! Strongly typed renditions of the shapes HTTP clients hand back.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RawResponse`] | Resolved value tagged by client convention |
//! | [`Rejection`] | Failure reason tagged by client convention |
//! | [`HttpResponse`] | Canonical response record |
//! | [`HttpError`] | Canonical error record |
//! | [`Payload`] | The data slot |
//! | [`Fault`] | A runtime exception carried as a value |

pub mod fault;
pub mod payload;
pub mod rejection;
pub mod response;

pub use fault::{Fault, FaultKind};
pub use payload::Payload;
pub use rejection::{ClientError, ErrorResponse, HttpError, LeanError, Rejection, CLIENT_ERROR_MARKER};
pub use response::{FetchResponse, HttpResponse, LeanResponse, RawResponse};
