pub mod headers;

pub use headers::{headers_from_json, headers_to_json};
