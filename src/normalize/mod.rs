//! Normalizers: pure functions from client-specific shapes to the canonical
//! response and error records.

mod error;
mod response;

pub use error::normalize_error;
pub use response::normalize_response;
