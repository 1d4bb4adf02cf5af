//! Runtime knobs for the wrapper.
//!
//! Defaults follow the conventions of the wrapped clients: failures without any
//! status are reported as 500, and values resolved without status information
//! are reported as 200. Both can be overridden in code or from the environment.

use std::env;

use crate::{Error, ErrorContext, Result};

pub const ENV_DEFAULT_ERROR_STATUS: &str = "SAFE_AWAIT_DEFAULT_ERROR_STATUS";
pub const ENV_RAW_SUCCESS_STATUS: &str = "SAFE_AWAIT_RAW_SUCCESS_STATUS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Status reported for failures that carry no status of their own
    pub default_error_status: u16,
    /// Status reported for resolved values that carry no status information
    pub raw_success_status: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_error_status: 500,
            raw_success_status: 200,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `SAFE_AWAIT_DEFAULT_ERROR_STATUS` and
    /// `SAFE_AWAIT_RAW_SUCCESS_STATUS`. Missing or invalid values keep the
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|s| is_valid_status(*s))
                .unwrap_or(fallback)
        };
        Self {
            default_error_status: read(ENV_DEFAULT_ERROR_STATUS, defaults.default_error_status),
            raw_success_status: read(ENV_RAW_SUCCESS_STATUS, defaults.raw_success_status),
        }
    }

    pub fn with_default_error_status(mut self, status: u16) -> Self {
        self.default_error_status = status;
        self
    }

    pub fn with_raw_success_status(mut self, status: u16) -> Self {
        self.raw_success_status = status;
        self
    }

    /// Both statuses must be three-digit HTTP status codes.
    pub fn validate(&self) -> Result<()> {
        for (field, status) in [
            ("default_error_status", self.default_error_status),
            ("raw_success_status", self.raw_success_status),
        ] {
            if !is_valid_status(status) {
                return Err(Error::configuration_with_context(
                    "status must be between 100 and 999",
                    ErrorContext::new()
                        .with_field_path(field)
                        .with_details(format!("got {}", status))
                        .with_source("config"),
                ));
            }
        }
        Ok(())
    }
}

fn is_valid_status(status: u16) -> bool {
    (100..=999).contains(&status)
}
